use proptest::prelude::*;

use proledger_types::{Identity, MemberId, SkillId};

proptest! {
    /// Display then parse yields the same identity.
    #[test]
    fn identity_display_parse_roundtrip(bytes in prop::array::uniform20(0u8..)) {
        let id = Identity::new(bytes);
        let parsed = Identity::parse(&id.to_string()).unwrap();
        prop_assert_eq!(parsed, id);
    }

    /// Identity bincode serialization roundtrip.
    #[test]
    fn identity_bincode_roundtrip(bytes in prop::array::uniform20(0u8..)) {
        let id = Identity::new(bytes);
        let encoded = bincode::serialize(&id).unwrap();
        let decoded: Identity = bincode::deserialize(&encoded).unwrap();
        prop_assert_eq!(decoded, id);
    }

    /// Id ordering follows arena position.
    #[test]
    fn id_ordering_matches_index(a in 0usize..1_000_000, b in 0usize..1_000_000) {
        let ia = MemberId::from_index(a);
        let ib = MemberId::from_index(b);
        prop_assert_eq!(ia <= ib, a <= b);
        prop_assert_eq!(ia.index(), a);
    }

    /// Only zero fails to construct an id.
    #[test]
    fn id_new_rejects_only_zero(raw in 0u64..u64::MAX) {
        prop_assert_eq!(SkillId::new(raw).is_some(), raw != 0);
    }
}
