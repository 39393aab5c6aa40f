use super::*;

#[test]
fn chain() {
    let sorted = topological_sort([3, 2, 1], [(1, 2), (2, 3)]);
    assert_eq!(sorted, vec![1, 2, 3]);
}

#[test]
fn independent_nodes_keep_their_order() {
    let sorted = topological_sort(["c", "a", "b"], Vec::<(&str, &str)>::new());
    assert_eq!(sorted, vec!["c", "a", "b"]);
}

#[test]
fn page_ordering() {
    // Rules of the form `before|after`, restricted to one update.
    let rules = [
        (47, 53),
        (97, 13),
        (97, 61),
        (97, 47),
        (75, 29),
        (61, 13),
        (75, 53),
        (29, 13),
        (97, 29),
        (53, 29),
        (61, 53),
        (97, 53),
        (61, 29),
        (47, 13),
        (75, 47),
        (97, 75),
        (47, 61),
        (75, 61),
        (47, 29),
        (75, 13),
        (53, 13),
    ];
    assert_eq!(
        topological_sort([75, 97, 47, 61, 53], rules),
        vec![97, 75, 47, 61, 53]
    );
    assert_eq!(topological_sort([61, 13, 29], rules), vec![61, 29, 13]);
    assert_eq!(
        topological_sort([97, 13, 75, 29, 47], rules),
        vec![97, 75, 47, 29, 13]
    );
}

#[test]
fn foreign_edges_are_ignored() {
    let sorted = topological_sort([1, 2], [(1, 2), (0, 1), (2, 9)]);
    assert_eq!(sorted, vec![1, 2]);
}

#[test]
fn duplicate_edges() {
    let sorted = topological_sort([1, 2], [(1, 2), (1, 2)]);
    assert_eq!(sorted, vec![1, 2]);
}

#[test]
fn cycles_are_dropped() {
    let sorted = topological_sort([1, 2, 3, 4], [(1, 2), (2, 3), (3, 2), (3, 4)]);
    assert_eq!(sorted, vec![1]);
}
