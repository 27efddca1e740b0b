use extendible_array::{BufferLayout, ExtendibleArray};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn contents(array: &ExtendibleArray<i32>) -> Vec<i32> {
    array.iter().copied().collect()
}

#[test]
fn test_new_array_is_empty() {
    let array = ExtendibleArray::<i32>::new();

    assert_eq!(array.len(), 0);
    assert!(array.is_empty());
    assert_eq!(array.get(0), None);
    assert_eq!(array.first(), None);
    assert_eq!(array.last(), None);
    assert_eq!(
        array.layout(),
        BufferLayout {
            new_capacity: 1,
            old_capacity: 0,
            shadow: -1,
            end: 1,
        }
    );
}

#[test]
fn test_push_then_get_across_promotion() {
    let mut array = ExtendibleArray::new();
    for value in 1..=4 {
        array.push(value);
    }

    assert_eq!(array.len(), 4);
    assert_eq!(contents(&array), [1, 2, 3, 4]);
    assert_eq!(array.layout().new_capacity, 8);

    // The fifth element lands in the same 8-slot generation; the next
    // promotion comes with the push after position 7 is filled
    array.push(5);
    assert_eq!(contents(&array), [1, 2, 3, 4, 5]);
    for index in 0..5 {
        assert_eq!(array.get(index), Some(&(index as i32 + 1)));
    }

    array.push(6);
    array.push(7);
    assert_eq!(array.layout().new_capacity, 8);
    array.push(8);
    assert_eq!(array.layout().new_capacity, 16);
    assert_eq!(contents(&array), [1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn test_remove_front_yields_in_order() {
    let mut array: ExtendibleArray<i32> = (1..=5).collect();

    let removed: Vec<i32> = (0..5).map(|_| array.remove(0).unwrap()).collect();

    assert_eq!(removed, [1, 2, 3, 4, 5]);
    assert_eq!(array.len(), 0);
    assert!(array.is_empty());
}

#[test]
fn test_insert_in_middle() {
    let mut array: ExtendibleArray<i32> = [1, 2, 4, 5].into_iter().collect();

    array.insert(2, 3).unwrap();

    assert_eq!(contents(&array), [1, 2, 3, 4, 5]);
}

#[test]
fn test_remove_in_middle() {
    let mut array: ExtendibleArray<i32> = (1..=5).collect();

    assert_eq!(array.remove(2), Ok(3));

    assert_eq!(contents(&array), [1, 2, 4, 5]);
}

#[test]
fn test_insert_at_every_position() {
    for len in 0..40 {
        for index in 0..=len {
            let mut array: ExtendibleArray<i32> = (0..len as i32).collect();
            let mut expected: Vec<i32> = (0..len as i32).collect();

            array.insert(index, -1).unwrap();
            expected.insert(index, -1);

            assert_eq!(contents(&array), expected, "len {len}, index {index}");
        }
    }
}

#[test]
fn test_remove_at_every_position() {
    for len in 1..40 {
        for index in 0..len {
            let mut array: ExtendibleArray<i32> = (0..len as i32).collect();
            let mut expected: Vec<i32> = (0..len as i32).collect();

            assert_eq!(array.remove(index), Ok(expected.remove(index)));
            assert_eq!(contents(&array), expected, "len {len}, index {index}");
        }
    }
}

#[test]
fn test_insert_at_end_behaves_like_push() {
    let mut array = ExtendibleArray::new();
    for value in 0..20 {
        array.insert(array.len(), value).unwrap();
    }
    assert_eq!(contents(&array), (0..20).collect::<Vec<_>>());
}

#[test]
fn test_set_returns_previous_value() {
    let mut array: ExtendibleArray<i32> = (0..10).collect();

    for index in 0..10 {
        assert_eq!(array.set(index, index as i32 * 100), Ok(index as i32));
    }

    assert_eq!(
        contents(&array),
        [0, 100, 200, 300, 400, 500, 600, 700, 800, 900]
    );
}

#[test]
fn test_interleaved_push_get_set() {
    let mut array = ExtendibleArray::new();
    let mut expected = Vec::new();

    for value in 0..300 {
        array.push(value);
        expected.push(value);

        let probe = value as usize / 2;
        assert_eq!(array.get(probe), expected.get(probe));
        if value % 3 == 0 {
            let replaced = array.set(probe, -value).unwrap();
            assert_eq!(replaced, expected[probe]);
            expected[probe] = -value;
        }
        assert_eq!(array.len(), expected.len());
    }

    assert_eq!(contents(&array), expected);
}

#[test]
fn test_get_mut_and_index_mut() {
    let mut array: ExtendibleArray<i32> = (1..=6).collect();

    if let Some(element) = array.get_mut(0) {
        *element = 10;
    }
    array[5] += 100;

    assert_eq!(array[0], 10);
    assert_eq!(array[5], 106);
    assert_eq!(array.get_mut(6), None);
}

#[test]
fn test_first_last_contains() {
    let array: ExtendibleArray<i32> = (3..9).collect();

    assert_eq!(array.first(), Some(&3));
    assert_eq!(array.last(), Some(&8));
    assert!(array.contains(&5));
    assert!(!array.contains(&9));
}

#[test]
fn test_swap_across_buffers() {
    // 1..=5 pushed: index 0 in the old buffer, the rest in the new one
    let mut array: ExtendibleArray<i32> = (1..=5).collect();

    array.swap(0, 4).unwrap();
    array.swap(2, 2).unwrap();
    array.swap(1, 3).unwrap();

    assert_eq!(contents(&array), [5, 4, 3, 2, 1]);
    assert!(array.swap(0, 5).is_err());
}

#[test]
fn test_clear_operation() {
    let mut array: ExtendibleArray<i32> = (0..100).collect();

    array.clear();

    assert!(array.is_empty());
    assert_eq!(array.layout(), ExtendibleArray::<i32>::new().layout());

    array.push(1);
    assert_eq!(contents(&array), [1]);
}

#[test]
fn test_capacity_tracks_promotions() {
    let mut array = ExtendibleArray::new();
    assert_eq!(array.capacity(), 0);

    array.push(1);
    assert_eq!(array.capacity(), 1);

    array.push(2);
    assert_eq!(array.capacity(), 3);

    for value in 3..=8 {
        array.push(value);
    }
    assert_eq!(array.capacity(), 15);
    assert!(array.len() <= array.capacity());
}

#[test]
fn test_equality_and_hash_follow_contents() {
    // Same contents reached through different operation histories
    let pushed: ExtendibleArray<i32> = (1..=3).collect();
    let mut built = ExtendibleArray::new();
    for value in [9, 3, 8, 2, 1] {
        built.insert(0, value).unwrap();
    }
    built.remove(4).unwrap();
    built.remove(2).unwrap();

    assert_eq!(pushed, built);
    assert_eq!(pushed.layout(), built.layout());

    let mut hasher_a = DefaultHasher::new();
    let mut hasher_b = DefaultHasher::new();
    pushed.hash(&mut hasher_a);
    built.hash(&mut hasher_b);
    assert_eq!(hasher_a.finish(), hasher_b.finish());

    built.push(4);
    assert_ne!(pushed, built);
}

#[test]
fn test_clone_is_independent() {
    let original: ExtendibleArray<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
    let mut copy = original.clone();

    copy.set(0, "z".to_string()).unwrap();
    copy.push("d".to_string());

    assert_eq!(original.len(), 3);
    assert_eq!(original[0], "a");
    assert_eq!(copy[0], "z");
    assert_eq!(copy.len(), 4);
}

#[test]
fn test_debug_lists_elements() {
    let array: ExtendibleArray<i32> = (1..=3).collect();
    assert_eq!(format!("{:?}", array), "[1, 2, 3]");

    let empty = ExtendibleArray::<i32>::default();
    assert_eq!(format!("{:?}", empty), "[]");
}

#[test]
fn test_extend_by_reference() {
    let mut array: ExtendibleArray<i32> = (1..=2).collect();
    let more = [3, 4, 5];

    array.extend(more.iter());

    assert_eq!(contents(&array), [1, 2, 3, 4, 5]);
}
