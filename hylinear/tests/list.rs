use hylinear::linear::Dup;
use hylinear::list::{CatList, List};

#[test]
fn fold_is_left_to_right() {
    let xs: List<u32> = [1, 2, 3, 4].into_iter().collect();
    assert_eq!(xs.fold(0, |acc, x| acc * 10 + x), 1234);
}

#[test]
fn unfold_then_fold() {
    let countdown = List::unfold(5u32, |n| (n > 0).then(|| (n, n - 1)));
    assert_eq!(countdown.iter().copied().collect::<Vec<_>>(), [5, 4, 3, 2, 1]);
    assert_eq!(countdown.fold(0, |a, b| a + b), 15);
}

#[test]
fn concat_preserves_length_and_order() {
    let xs: List<char> = "abc".chars().collect();
    let ys: List<char> = "de".chars().collect();
    let zs = xs.concat(ys);
    assert_eq!(zs.len(), 5);
    assert_eq!(zs.into_iter().collect::<String>(), "abcde");
}

#[test]
fn concat_with_empty_is_identity() {
    let xs: List<u8> = [1, 2].into_iter().collect();
    let ys = List::new().concat(xs).concat(List::new());
    assert_eq!(ys, [1u8, 2].into_iter().collect::<List<u8>>());
}

#[test]
fn list_dup_yields_equal_lists() {
    let xs: List<u32> = (0..10).collect();
    let (a, b) = xs.dup();
    assert_eq!(a, b);
    assert_eq!(a.len(), 10);
}

#[test]
fn map_and_reverse() {
    let xs: List<u32> = (1..=3).collect();
    let ys = xs.map(|x| x * x).reverse();
    assert_eq!(format!("{ys:?}"), "[9, 4, 1]");
}

#[test]
fn catlist_concat_is_ordered() {
    let a = CatList::from_iter(1..=3u32);
    let b = CatList::new().push_front(5u32).push_front(4);
    let c = a.concat(CatList::new()).concat(b);
    assert_eq!(c.len(), 5);
    assert_eq!(format!("{c:?}"), "[1, 2, 3, 4, 5]");
    assert_eq!(c.into_list().into_iter().collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
}

#[test]
fn catlist_unfold_and_fold() {
    let t = CatList::unfold(1u32, |n| (n <= 4).then_some((n, n * 2)));
    assert_eq!(t.fold(Vec::new(), |mut v, x| {
        v.push(x);
        v
    }), [1, 2, 4]);
}

#[test]
fn catlist_from_list_and_dup() {
    let xs: List<u32> = (0..6).collect();
    let (a, b) = CatList::from(xs).dup();
    assert_eq!(a.fold(0, |s, x| s + x), 15);
    assert_eq!(b.into_iter().last(), Some(5));
}
