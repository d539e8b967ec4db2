use avl_tree::AvlTree;
use rand::Rng;

#[test]
fn test_random_workload() {
    let mut rng = rand::thread_rng();
    let mut tree = AvlTree::new();
    let mut expected = Vec::new();
    for _ in 0..10000 {
        let value = rng.gen::<u32>();
        if tree.try_insert(value) {
            expected.push(value);
        }
    }
    expected.sort();

    assert_eq!(tree.len(), expected.len());
    assert!(tree.is_balanced());

    let actual = tree.iter().cloned().collect::<Vec<u32>>();
    assert_eq!(actual, expected);

    let mut kept = Vec::new();
    for (i, value) in expected.iter().enumerate() {
        if i % 2 == 0 {
            assert!(tree.try_remove(value).is_some());
        } else {
            kept.push(*value);
        }
    }

    assert_eq!(tree.len(), kept.len());
    assert!(tree.is_balanced());

    let actual = tree.iter().cloned().collect::<Vec<u32>>();
    assert_eq!(actual, kept);
}
