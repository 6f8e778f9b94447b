use crate::{
    Collection, CollectionError, CollectionExt, CollectionKind, Cursor, DrainCursor, HasLength,
    Iterable,
};
use rstest::rstest;
use std::collections::{BTreeSet, HashSet, VecDeque};
use std::fmt::Debug;

trait TestCollection: Collection<Item = i32> + Default + FromIterator<i32> + Debug {}

impl<C: Collection<Item = i32> + Default + FromIterator<i32> + Debug> TestCollection for C {}

fn empty<C: TestCollection>() {
    let items = C::default();

    assert!(items.is_empty());
    assert_eq!(items.len(), 0);
    assert_eq!(items.iter().count(), 0);
    assert_eq!(items.to_vec(), Vec::<i32>::new());
    assert_eq!(items.export_with(Vec::<i64>::with_capacity), Ok(vec![]));
    assert_eq!(items.stream().count(), 0);
}

fn add_then_contains<C: TestCollection>() {
    let mut items = C::default();

    for value in [4, 8, 15] {
        assert_eq!(items.add(value), Ok(true));
        assert!(items.contains(&value));
        assert_eq!(items.len() == 0, items.is_empty());
    }
    assert_eq!(items.len(), 3);
}

fn remove_one<C: TestCollection>() {
    let mut items: C = [1, 2, 3].into_iter().collect();

    assert_eq!(items.remove(&2), Ok(true));
    assert!(!items.contains(&2));
    assert_eq!(items.remove(&2), Ok(false));
    assert_eq!(items.len(), 2);
}

fn clear_twice<C: TestCollection>() {
    let mut items: C = [1, 2, 3].into_iter().collect();

    assert_eq!(items.clear(), Ok(()));
    assert!(items.is_empty());
    assert_eq!(items.clear(), Ok(()));
    assert!(items.is_empty());
}

fn export_round_trip<C: TestCollection>() {
    let items: C = [5, 1, 3, 7].into_iter().collect();

    let rebuilt: C = items.to_vec().into_iter().collect();
    assert!(rebuilt.content_eq(&items));

    let exported = items.export_into(Vec::<i64>::new()).unwrap();
    assert_eq!(exported.len(), 4);
    assert!(exported.iter().all(|v| items.contains(&(*v as i32))));
}

fn remove_if_is_idempotent<C: TestCollection>() {
    let mut items: C = (1..=10).collect();

    assert_eq!(items.remove_if(|v| v % 3 == 0), Ok(true));
    assert_eq!(items.remove_if(|v| v % 3 == 0), Ok(false));
    assert_eq!(items.len(), 7);
}

fn cursor_removal<C: TestCollection>() {
    let mut items: C = (1..=6).collect();
    {
        let mut cursor = items.cursor();
        while let Some(value) = cursor.advance() {
            if value % 2 == 0 {
                cursor.remove_current().unwrap();
            }
        }
    }

    assert_eq!(items.len(), 3);
    assert!(items.contains_all(&[1, 3, 5]));
    assert!(!items.contains(&4));
}

fn equal_contents_hash_equally<C: TestCollection>() {
    let a: C = [3, 1, 2].into_iter().collect();
    let mut b = C::default();
    b.extend_from([3, 1, 2]).unwrap();

    assert!(a.content_eq(&b));
    assert!(b.content_eq(&a));
    assert_eq!(a.content_hash(), b.content_hash());
}

fn add_all_empty<C: TestCollection>() {
    let mut items: C = [1, 2].into_iter().collect();

    assert_eq!(items.add_all(&Vec::new()), Ok(false));
    assert_eq!(items.len(), 2);
}

fn retain_all_disjoint<C: TestCollection>() {
    let mut items: C = [1, 2, 3].into_iter().collect();

    assert_eq!(items.retain_all(&[7, 8]), Ok(true));
    assert!(items.is_empty());
    assert_eq!(items.retain_all(&[7, 8]), Ok(false));
}

fn remove_all<C: TestCollection>() {
    let mut items: C = (1..=5).collect();

    assert_eq!(items.remove_all(&[2, 4, 9]), Ok(true));
    assert_eq!(items.remove_all(&[2, 4, 9]), Ok(false));
    assert!(items.contains_all(&[1, 3, 5]));
    assert_eq!(items.len(), 3);
}

fn predicate_failure_propagates<C: TestCollection>() {
    let mut items: C = (1..=4).collect();
    let last = items.iter().last().copied().unwrap();

    let result = items.try_remove_if(|v| {
        if *v == last {
            Err(CollectionError::IllegalValue(v.to_string()))
        } else {
            Ok(true)
        }
    });

    assert_eq!(result, Err(CollectionError::IllegalValue(last.to_string())));
    assert_eq!(items.len(), 1);
    assert!(items.contains(&last));
}

/// Unordered collection that relies on the provided `try_remove_if`
#[derive(Debug, Default)]
struct Bag(Vec<i32>);

impl FromIterator<i32> for Bag {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl HasLength for Bag {
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl Iterable for Bag {
    type Item = i32;

    fn iter(&self) -> impl Iterator<Item = &i32> {
        self.0.as_slice().iter()
    }
}

impl Collection for Bag {
    type Cursor<'a> = DrainCursor<'a, Vec<i32>>;

    fn kind(&self) -> CollectionKind {
        CollectionKind::Bag
    }

    fn contains(&self, value: &i32) -> bool {
        self.0.as_slice().contains(value)
    }

    fn cursor(&mut self) -> Self::Cursor<'_> {
        DrainCursor::new(&mut self.0)
    }

    fn add(&mut self, value: i32) -> Result<bool, CollectionError> {
        self.0.push(value);
        Ok(true)
    }

    fn remove(&mut self, value: &i32) -> Result<bool, CollectionError> {
        match self.0.as_slice().iter().position(|v| v == value) {
            Some(index) => {
                self.0.swap_remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn clear(&mut self) -> Result<(), CollectionError> {
        Vec::clear(&mut self.0);
        Ok(())
    }
}

duplicate::duplicate! {
    [
    module_name collection_type enabled;
    [vec] [Vec<i32>] [all()];
    [vec_deque] [std::collections::VecDeque<i32>] [all()];
    [hash_set] [std::collections::HashSet<i32>] [all()];
    [btree_set] [std::collections::BTreeSet<i32>] [all()];
    [bag] [super::Bag] [all()];
    [small_vec] [smallvec::SmallVec<[i32; 4]>] [feature = "smallvec"];
    [array_vec] [arrayvec::ArrayVec<i32, 16>] [feature = "arrayvec"];
    [order_set] [ordermap::OrderSet<i32>] [feature = "ordermap"];
]
#[cfg(enabled)]
mod module_name {
    #[test]
    fn empty() {
        super::empty::<collection_type>();
    }

    #[test]
    fn add_then_contains() {
        super::add_then_contains::<collection_type>();
    }

    #[test]
    fn remove_one() {
        super::remove_one::<collection_type>();
    }

    #[test]
    fn clear_twice() {
        super::clear_twice::<collection_type>();
    }

    #[test]
    fn export_round_trip() {
        super::export_round_trip::<collection_type>();
    }

    #[test]
    fn remove_if_is_idempotent() {
        super::remove_if_is_idempotent::<collection_type>();
    }

    #[test]
    fn cursor_removal() {
        super::cursor_removal::<collection_type>();
    }

    #[test]
    fn equal_contents_hash_equally() {
        super::equal_contents_hash_equally::<collection_type>();
    }

    #[test]
    fn add_all_empty() {
        super::add_all_empty::<collection_type>();
    }

    #[test]
    fn retain_all_disjoint() {
        super::retain_all_disjoint::<collection_type>();
    }

    #[test]
    fn remove_all() {
        super::remove_all::<collection_type>();
    }

    #[test]
    fn predicate_failure_propagates() {
        super::predicate_failure_propagates::<collection_type>();
    }
}
}

#[test]
fn cursor_removal_without_override() {
    let mut bag: Bag = [1, 2, 2, 3].into_iter().collect();

    assert_eq!(bag.remove_if(|v| *v == 2), Ok(true));
    assert_eq!(bag.0, vec![1, 3]);
    assert_eq!(bag.remove_if(|v| *v == 2), Ok(false));
    assert_eq!(bag.0, vec![1, 3]);
}

#[test]
fn cursor_removal_keeps_progress_on_failure() {
    let mut bag: Bag = [1, 2, 3, 4].into_iter().collect();

    let result = bag.try_remove_if(|v| match v {
        3 => Err(CollectionError::IllegalValue("3".to_string())),
        _ => Ok(true),
    });

    assert_eq!(result, Err(CollectionError::IllegalValue("3".to_string())));
    assert_eq!(bag.0, vec![3, 4]);
}

#[test]
fn bags_compare_by_multiplicity() {
    let bag: Bag = [1, 2, 2, 3].into_iter().collect();
    let shuffled: Bag = [2, 3, 2, 1].into_iter().collect();
    let different: Bag = [1, 2, 3, 3].into_iter().collect();
    let sequence = vec![1, 2, 2, 3];

    assert_eq!(bag.kind(), CollectionKind::Bag);
    assert!(bag.content_eq(&shuffled));
    assert_eq!(bag.content_hash(), shuffled.content_hash());
    assert!(!bag.content_eq(&different));
    assert!(!bag.content_eq(&sequence));
    assert!(!sequence.content_eq(&bag));
}

#[test]
fn float_elements_compare() {
    let items = vec![0.5, 1.5];
    let deque: VecDeque<f64> = [0.5, 1.5].into();

    assert!(items.content_eq(&deque));
    assert!(!items.content_eq(&vec![f64::NAN, 1.5]));
}

#[rstest]
#[case(&[1, 2, 2, 3], 2, &[1, 3])]
#[case(&[2, 2], 2, &[])]
#[case(&[1, 3], 2, &[1, 3])]
fn remove_if_keeps_sequence_order(
    #[case] initial: &[i32],
    #[case] target: i32,
    #[case] expected: &[i32],
) {
    let mut items = initial.to_vec();
    let mut deque: VecDeque<i32> = initial.iter().copied().collect();

    let changed = initial.contains(&target);
    assert_eq!(items.remove_if(|v| *v == target), Ok(changed));
    assert_eq!(deque.remove_if(|v| *v == target), Ok(changed));

    assert_eq!(items, expected);
    assert!(deque.iter().eq(expected.iter()));
    assert!(!Collection::contains(&items, &target));
}

#[test]
fn kinds_restrict_equality() {
    let sequence = vec![1, 2, 3];
    let reversed = vec![3, 2, 1];
    let hashed: HashSet<i32> = [1, 2, 3].into();
    let ordered: BTreeSet<i32> = [3, 2, 1].into();

    assert_eq!(sequence.kind(), CollectionKind::Sequence);
    assert_eq!(hashed.kind(), CollectionKind::Set);

    assert!(!sequence.content_eq(&reversed));
    assert!(!sequence.content_eq(&hashed));
    assert!(hashed.content_eq(&ordered));
    assert!(ordered.content_eq(&hashed));
    assert_eq!(hashed.content_hash(), ordered.content_hash());
}

#[test]
fn sequences_of_different_types_compare_by_content() {
    let items = vec![1, 2, 3];
    let deque: VecDeque<i32> = [1, 2, 3].into();

    assert!(items.content_eq(&deque));
    assert!(items.content_eq(&[1, 2, 3]));
    assert_eq!(items.content_hash(), deque.content_hash());
}

#[test]
fn export_reuses_large_buffers() {
    let items = vec![1u8, 2, 3];
    let buffer: Vec<u32> = Vec::with_capacity(16);

    let exported = items.export_into(buffer).unwrap();

    assert_eq!(exported, vec![1, 2, 3]);
    assert_eq!(exported.capacity(), 16);
}

#[test]
fn export_reports_unrepresentable_elements() {
    let items = vec![1i32, -2, 3];

    assert_eq!(
        items.export_with(Vec::<u32>::with_capacity),
        Err(CollectionError::ArrayStoreMismatch {
            buffer: "u32",
            index: 1
        })
    );
}

#[test]
fn export_with_requests_zero_length() {
    let items = BTreeSet::from([1, 2, 3]);
    let mut requested = None;

    let exported = items
        .export_with(|len| {
            requested = Some(len);
            Vec::<i64>::with_capacity(len)
        })
        .unwrap();

    assert_eq!(requested, Some(0));
    assert_eq!(exported, vec![1, 2, 3]);
}
