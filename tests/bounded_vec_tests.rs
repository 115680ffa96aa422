mod common;

use common::{Ledger, Tracked};
use slotted::{BoundedVec, Error};

#[test]
fn test_fill_to_capacity_scenario() {
    let mut vec: BoundedVec<i32, 3> = BoundedVec::new();
    vec.push_back(10).unwrap();
    vec.push_back(20).unwrap();
    vec.push_back(30).unwrap();

    assert!(vec.is_full());
    assert_eq!(vec.len(), 3);
    assert_eq!(vec.iter().sum::<i32>(), 60);
    assert_eq!(vec.push_back(40), Err(Error::CapacityExceeded { capacity: 3 }));
    assert_eq!(vec.len(), 3);
}

#[test]
fn test_string_access() {
    let mut vec: BoundedVec<String, 4> = BoundedVec::new();
    vec.push_back("a".to_string()).unwrap();
    vec.push_back("bc".to_string()).unwrap();

    assert_eq!(vec[0], "a");
    assert_eq!(vec[1], "bc");
    assert_eq!(vec.at(1).map(String::as_str), Ok("bc"));
    assert_eq!(vec.at(5), Err(Error::OutOfRange { index: 5, len: 2 }));
}

#[test]
fn test_push_pop_clear_cycle() {
    let mut vec: BoundedVec<i32, 2> = BoundedVec::new();
    assert_eq!(vec.pop_back(), Err(Error::Underflow));

    vec.push_back(1).unwrap();
    vec.push_back(2).unwrap();
    assert!(vec.is_full());
    assert_eq!(vec.push_back(3), Err(Error::CapacityExceeded { capacity: 2 }));

    assert_eq!(vec.pop_back(), Ok(2));
    assert_eq!(vec.len(), 1);
    vec.push_back(99).unwrap();
    assert_eq!(vec.len(), 2);

    vec.clear();
    assert_eq!(vec.len(), 0);
    assert!(vec.is_empty());
}

#[test]
fn test_emplace_constructs_in_place() {
    let ledger = Ledger::new();
    {
        let mut vec: BoundedVec<Tracked, 4> = BoundedVec::new();
        assert_eq!(ledger.made(), 0);
        vec.emplace_back(|| Tracked::new(5, &ledger)).unwrap();
        assert_eq!(ledger.made(), 1);
        vec.emplace_back(|| Tracked::new(6, &ledger)).unwrap();
        assert_eq!(ledger.made(), 2);

        assert_eq!(vec.len(), 2);
        assert_eq!(vec[0].value, 5);
        assert_eq!(vec[1].value, 6);
    }
    assert_eq!(ledger.dropped(), ledger.made());
}

#[test]
fn test_clone_and_clone_from() {
    let ledger = Ledger::new();
    let mut a: BoundedVec<Tracked, 5> = BoundedVec::new();
    a.push_back(Tracked::new(1, &ledger)).unwrap();
    a.push_back(Tracked::new(2, &ledger)).unwrap();

    let b = a.clone();
    assert_eq!(b.len(), 2);
    assert_eq!(ledger.cloned(), 2);
    assert_eq!(b, a);

    let mut c: BoundedVec<Tracked, 5> = BoundedVec::new();
    c.push_back(Tracked::new(9, &ledger)).unwrap();
    c.clone_from(&a);
    assert_eq!(c.iter().map(|t| t.value).collect::<Vec<_>>(), vec![1, 2]);

    drop((a, b, c));
    assert_eq!(ledger.live(), 0);
}

#[test]
fn test_take_and_move_from() {
    let mut a: BoundedVec<i32, 5> = BoundedVec::try_from([11, 22]).unwrap();

    let mut b = a.take();
    assert_eq!(b, [11, 22]);
    assert_eq!(a.len(), 0);

    let mut c: BoundedVec<i32, 5> = BoundedVec::new();
    c.move_from(&mut b);
    assert_eq!(c.len(), 2);
    assert_eq!(b.len(), 0);

    // The moved-from vector is still usable.
    a.push_back(1).unwrap();
    assert_eq!(a, [1]);
}

#[test]
fn test_pointer_and_slice_views() {
    let mut vec: BoundedVec<u32, 4> = BoundedVec::try_from([1, 2, 3]).unwrap();
    assert_eq!(vec.as_ptr(), vec.as_slice().as_ptr());
    assert_eq!(unsafe { *vec.as_ptr().add(2) }, 3);

    for v in &mut vec {
        *v *= 2;
    }
    assert_eq!(vec.as_slice(), &[2, 4, 6]);
    assert_eq!(vec.iter().rev().copied().collect::<Vec<_>>(), vec![6, 4, 2]);
    assert_eq!(vec.first(), Some(&2));
    assert!(vec.contains(&4));
}

#[test]
fn test_try_from_iter() {
    let vec: BoundedVec<i32, 4> = BoundedVec::try_from_iter(0..4).unwrap();
    assert_eq!(vec, [0, 1, 2, 3]);

    let ledger = Ledger::new();
    let overflow =
        BoundedVec::<Tracked, 2>::try_from_iter((0..3).map(|i| Tracked::new(i, &ledger)));
    assert_eq!(overflow.err(), Some(Error::CapacityExceeded { capacity: 2 }));
    assert_eq!(ledger.live(), 0);
}

#[test]
fn test_errors_compose_with_anyhow() -> anyhow::Result<()> {
    let mut vec: BoundedVec<i32, 2> = BoundedVec::new();
    vec.push_back(1)?;
    vec.push_back(2)?;

    let err = vec.push_back(3).map(|_| ()).map_err(anyhow::Error::from).unwrap_err();
    assert_eq!(err.to_string(), "no room to emplace: capacity 2 reached");
    assert_eq!(
        err.downcast_ref::<Error>(),
        Some(&Error::CapacityExceeded { capacity: 2 })
    );
    Ok(())
}

#[test]
fn test_hash_matches_slice() {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let vec: BoundedVec<u8, 8> = BoundedVec::try_from([1, 2, 3]).unwrap();
    let mut a = DefaultHasher::new();
    let mut b = DefaultHasher::new();
    vec.hash(&mut a);
    [1u8, 2, 3][..].hash(&mut b);
    assert_eq!(a.finish(), b.finish());
}
