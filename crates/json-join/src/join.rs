//! The set-based join engine.
//!
//! One primitive, driven by three independent boolean switches, realizes all
//! six join modes. The engine is total: records that could not be keyed were
//! dropped by the partitioner and never reach it.

use json_join_keypath::KeyScalar;
use serde_json::Value;

use crate::partition::Partition;

/// The three emission switches of the join primitive.
///
/// | mode | `matched` | `left_only` | `right_only` |
/// |---|---|---|---|
/// | [`INNER`](JoinFlags::INNER) | yes | | |
/// | [`FULL_OUTER`](JoinFlags::FULL_OUTER) | yes | yes | yes |
/// | [`LEFT_OUTER`](JoinFlags::LEFT_OUTER) | yes | yes | |
/// | [`RIGHT_OUTER`](JoinFlags::RIGHT_OUTER) | yes | | yes |
/// | [`SYMMETRIC_DIFFERENCE`](JoinFlags::SYMMETRIC_DIFFERENCE) | | yes | yes |
/// | [`SUBTRACT`](JoinFlags::SUBTRACT) | | yes | |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinFlags {
    /// Emit the cross product for keys present on both sides.
    pub matched: bool,
    /// Emit `(record, absent)` for keys present only on the left.
    pub left_only: bool,
    /// Emit `(absent, record)` for keys present only on the right.
    pub right_only: bool,
}

impl JoinFlags {
    pub const INNER: JoinFlags = JoinFlags { matched: true, left_only: false, right_only: false };
    pub const FULL_OUTER: JoinFlags = JoinFlags { matched: true, left_only: true, right_only: true };
    pub const LEFT_OUTER: JoinFlags = JoinFlags { matched: true, left_only: true, right_only: false };
    pub const RIGHT_OUTER: JoinFlags = JoinFlags { matched: true, left_only: false, right_only: true };
    pub const SYMMETRIC_DIFFERENCE: JoinFlags =
        JoinFlags { matched: false, left_only: true, right_only: true };
    pub const SUBTRACT: JoinFlags = JoinFlags { matched: false, left_only: true, right_only: false };
}

/// One emitted pairing. `None` marks the absent side, which is distinct from
/// a borrowed JSON null.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JoinedPair<'a> {
    pub left: Option<&'a Value>,
    pub right: Option<&'a Value>,
}

/// Keys present in either partition, left keys first, then right-only keys,
/// each group in its partition's first-seen order.
///
/// Output order is observable, so the union order is fixed rather than left
/// to the map implementation.
pub fn union_keys<'p, 'a>(
    left: &'p Partition<'a>,
    right: &'p Partition<'a>,
) -> Vec<&'p KeyScalar> {
    let mut keys: Vec<&'p KeyScalar> = left.keys().collect();
    keys.extend(right.keys().filter(|k| !left.contains_key(k)));
    keys
}

/// Join two partitioned sides.
///
/// For every key in the union, at most one of the three branches fires:
/// - both sides populated: the full cross product, left-major, when `matched`;
/// - left side only: one `(record, absent)` pair per record, when `left_only`;
/// - right side only: one `(absent, record)` pair per record, when
///   `right_only`.
///
/// A key populated on both sides never reaches the one-sided branches,
/// whatever the flags.
pub fn join<'a>(
    left: &Partition<'a>,
    right: &Partition<'a>,
    flags: JoinFlags,
) -> Vec<JoinedPair<'a>> {
    let mut pairs = Vec::new();
    for key in union_keys(left, right) {
        let l = left.get(key);
        let r = right.get(key);
        if flags.matched && !l.is_empty() && !r.is_empty() {
            for &xl in l {
                for &xr in r {
                    pairs.push(JoinedPair { left: Some(xl), right: Some(xr) });
                }
            }
        }
        if flags.left_only && !l.is_empty() && r.is_empty() {
            for &xl in l {
                pairs.push(JoinedPair { left: Some(xl), right: None });
            }
        }
        if flags.right_only && l.is_empty() && !r.is_empty() {
            for &xr in r {
                pairs.push(JoinedPair { left: None, right: Some(xr) });
            }
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use json_join_keypath::KeyPath;
    use serde_json::json;

    fn parts<'a>(
        left: &'a [serde_json::Value],
        right: &'a [serde_json::Value],
    ) -> (Partition<'a>, Partition<'a>) {
        let key = KeyPath::parse(".id");
        (Partition::build(&key, left), Partition::build(&key, right))
    }

    #[test]
    fn cross_product_is_left_major() {
        let left = vec![
            json!({"id": 1, "l": "l1"}),
            json!({"id": 1, "l": "l2"}),
        ];
        let right = vec![
            json!({"id": 1, "r": "r1"}),
            json!({"id": 1, "r": "r2"}),
        ];
        let (lp, rp) = parts(&left, &right);
        let pairs = join(&lp, &rp, JoinFlags::INNER);

        assert_eq!(pairs.len(), 4);
        let order: Vec<(&str, &str)> = pairs
            .iter()
            .map(|p| {
                (
                    p.left.unwrap()["l"].as_str().unwrap(),
                    p.right.unwrap()["r"].as_str().unwrap(),
                )
            })
            .collect();
        assert_eq!(order, vec![("l1", "r1"), ("l1", "r2"), ("l2", "r1"), ("l2", "r2")]);
    }

    #[test]
    fn inner_emits_nothing_for_one_sided_keys() {
        let left = vec![json!({"id": 1}), json!({"id": 2})];
        let right = vec![json!({"id": 2}), json!({"id": 3})];
        let (lp, rp) = parts(&left, &right);
        let pairs = join(&lp, &rp, JoinFlags::INNER);

        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].left.unwrap()["id"], 2);
        assert_eq!(pairs[0].right.unwrap()["id"], 2);
    }

    #[test]
    fn one_sided_branches_never_fire_on_matched_keys() {
        let left = vec![json!({"id": 1})];
        let right = vec![json!({"id": 1})];
        let (lp, rp) = parts(&left, &right);
        let pairs = join(&lp, &rp, JoinFlags::SYMMETRIC_DIFFERENCE);
        assert!(pairs.is_empty());
    }

    #[test]
    fn full_outer_covers_every_keyed_record() {
        let left = vec![json!({"id": 1}), json!({"id": 2}), json!({"id": 2})];
        let right = vec![json!({"id": 2}), json!({"id": 3})];
        let (lp, rp) = parts(&left, &right);
        let pairs = join(&lp, &rp, JoinFlags::FULL_OUTER);

        // id=1 left-only, id=2 cross product (2x1), id=3 right-only.
        assert_eq!(pairs.len(), 4);
        let lefts = pairs.iter().filter(|p| p.left.is_some()).count();
        let rights = pairs.iter().filter(|p| p.right.is_some()).count();
        assert_eq!(lefts, 3);
        assert_eq!(rights, 3);
    }

    #[test]
    fn subtract_keeps_only_unmatched_left() {
        let left = vec![json!({"id": 1}), json!({"id": 2})];
        let right = vec![json!({"id": 2}), json!({"id": 3})];
        let (lp, rp) = parts(&left, &right);
        let pairs = join(&lp, &rp, JoinFlags::SUBTRACT);

        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].left.unwrap()["id"], 1);
        assert_eq!(pairs[0].right, None);
    }

    #[test]
    fn union_order_is_left_first_seen_then_right() {
        let left = vec![json!({"id": "b"}), json!({"id": "a"})];
        let right = vec![json!({"id": "c"}), json!({"id": "a"}), json!({"id": "d"})];
        let (lp, rp) = parts(&left, &right);
        let keys: Vec<_> = union_keys(&lp, &rp).into_iter().cloned().collect();
        assert_eq!(
            keys,
            vec![
                KeyScalar::String("b".into()),
                KeyScalar::String("a".into()),
                KeyScalar::String("c".into()),
                KeyScalar::String("d".into()),
            ]
        );
    }

    #[test]
    fn null_keys_join_like_any_other_key() {
        let left = vec![json!({"id": null, "side": "l"})];
        let right = vec![json!({"id": null, "side": "r"})];
        let (lp, rp) = parts(&left, &right);
        let pairs = join(&lp, &rp, JoinFlags::INNER);

        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].left.unwrap()["side"], "l");
        assert_eq!(pairs[0].right.unwrap()["side"], "r");
    }

    #[test]
    fn absent_marker_differs_from_null_value() {
        let left = vec![json!({"id": 1, "v": null})];
        let right: Vec<serde_json::Value> = vec![];
        let (lp, rp) = parts(&left, &right);
        let pairs = join(&lp, &rp, JoinFlags::LEFT_OUTER);

        assert_eq!(pairs.len(), 1);
        // The left record is present (and contains a real null); the right
        // side is absent.
        assert!(pairs[0].left.is_some());
        assert_eq!(pairs[0].left.unwrap()["v"], serde_json::Value::Null);
        assert_eq!(pairs[0].right, None);
    }
}
