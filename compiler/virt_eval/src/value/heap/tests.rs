use super::*;

#[test]
fn clone_shares_allocation() {
    let a = Heap::new(vec![1, 2, 3]);
    let b = a.clone();
    assert!(a.ptr_eq(&b));
    assert_eq!(*b, vec![1, 2, 3]);
}

#[test]
fn make_mut_detaches_shared_contents() {
    let original = Heap::new(vec![1, 2, 3]);
    let mut copy = original.clone();
    copy.make_mut().push(4);
    assert!(!original.ptr_eq(&copy));
    assert_eq!(*original, vec![1, 2, 3]);
    assert_eq!(*copy, vec![1, 2, 3, 4]);
}

#[test]
fn make_mut_on_unique_writes_in_place() {
    let mut unique = Heap::new(String::from("ab"));
    let before: *const String = &*unique;
    unique.make_mut().push('c');
    let after: *const String = &*unique;
    assert_eq!(&*unique, "abc");
    assert_eq!(before, after);
}
