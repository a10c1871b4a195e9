//! Unit tests for cad-events.

use cad_core::EventId;

use crate::AmbientEventRegistry;

/// Minimal event payload for tests.
#[derive(Debug, PartialEq)]
struct Brawl(&'static str);

#[cfg(test)]
mod registry {
    use super::*;

    #[test]
    fn ids_issue_from_zero_in_order() {
        let mut reg = AmbientEventRegistry::new();
        assert_eq!(reg.register(Brawl("a")), EventId(0));
        assert_eq!(reg.register(Brawl("b")), EventId(1));
        assert_eq!(reg.register(Brawl("c")), EventId(2));
    }

    #[test]
    fn ids_never_reissued_after_removal() {
        let mut reg = AmbientEventRegistry::new();
        let a = reg.register(Brawl("a"));
        reg.dispose(a);
        assert_eq!(reg.process(), 1);
        // The removed id's slot is gone for good.
        assert_eq!(reg.register(Brawl("b")), EventId(1));
        assert_eq!(reg.next_event_id(), EventId(2));
    }

    #[test]
    fn dispose_is_one_way_and_idempotent() {
        let mut reg = AmbientEventRegistry::new();
        let id = reg.register(Brawl("a"));
        assert!(reg.dispose(id));
        assert!(!reg.dispose(id));
        assert!(reg.is_disposed(id));
        assert!(!reg.dispose(EventId(99)));
    }

    #[test]
    fn disposed_entries_visible_until_swept() {
        let mut reg = AmbientEventRegistry::new();
        let id = reg.register(Brawl("a"));
        reg.dispose(id);

        // Not yet swept: still tracked, payload still readable.
        assert!(reg.contains(id));
        assert_eq!(reg.get(id), Some(&Brawl("a")));
        assert_eq!(reg.len(), 1);

        reg.process();
        assert!(!reg.contains(id));
        assert!(reg.get(id).is_none());
    }

    #[test]
    fn sweep_removes_exactly_the_disposed() {
        let mut reg = AmbientEventRegistry::new();
        let a = reg.register(Brawl("a"));
        let b = reg.register(Brawl("b"));
        let c = reg.register(Brawl("c"));
        assert_eq!((a, b, c), (EventId(0), EventId(1), EventId(2)));

        reg.dispose(b);
        assert_eq!(reg.process(), 1);

        let mut active: Vec<EventId> = reg.active().collect();
        active.sort();
        assert_eq!(active, vec![EventId(0), EventId(2)]);
    }

    #[test]
    fn second_sweep_removes_nothing() {
        let mut reg = AmbientEventRegistry::new();
        let a = reg.register(Brawl("a"));
        reg.register(Brawl("b"));
        reg.dispose(a);

        assert_eq!(reg.process(), 1);
        assert_eq!(reg.process(), 0);
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn sweep_on_empty_set_is_a_noop() {
        let mut reg: AmbientEventRegistry<Brawl> = AmbientEventRegistry::new();
        assert_eq!(reg.process(), 0);
        assert!(reg.is_empty());
    }
}
