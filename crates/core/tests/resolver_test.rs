use catalog_breadcrumbs_core::{
    find_trails, parse_document, BreadcrumbResolver, Catalog, CollectionNode, DocumentFormat,
    Product, Trail,
};

const SAMPLE: &str = include_str!("../../../data/catalog.json");

fn titles(trails: &[Trail]) -> Vec<Vec<&str>> {
    trails
        .iter()
        .map(|t| t.segments().iter().map(String::as_str).collect())
        .collect()
}

fn apparel() -> Catalog {
    Catalog::new(vec![CollectionNode::new("Apparel").with_child(
        CollectionNode::new("Tees").with_product(Product::new("p1", "Oversized Cotton Tee")),
    )])
}

#[test]
fn test_single_product_trail() {
    let trails = find_trails(&apparel(), "p1");
    assert_eq!(
        titles(&trails),
        vec![vec!["Apparel", "Tees", "Oversized Cotton Tee"]]
    );
}

#[test]
fn test_unknown_product_gives_no_trails() {
    assert!(find_trails(&apparel(), "p2").is_empty());
}

#[test]
fn test_two_branches_in_catalog_order() {
    let catalog = Catalog::new(vec![
        CollectionNode::new("Men").with_child(
            CollectionNode::new("Shoes").with_product(Product::new("p9", "Runner")),
        ),
        CollectionNode::new("Women").with_child(
            CollectionNode::new("Sport")
                .with_child(CollectionNode::new("Shoes").with_product(Product::new("p9", "Runner"))),
        ),
    ]);

    let trails = find_trails(&catalog, "p9");
    assert_eq!(
        titles(&trails),
        vec![
            vec!["Men", "Shoes", "Runner"],
            vec!["Women", "Sport", "Shoes", "Runner"],
        ]
    );
}

#[test]
fn test_bare_collection_is_skipped_without_error() {
    let catalog = Catalog::new(vec![
        CollectionNode::new("Empty"),
        CollectionNode::new("Bags").with_product(Product::new("p3", "Canvas Tote Bag")),
    ]);

    let resolver = BreadcrumbResolver::new(&catalog);
    let report = resolver.resolve("p3");
    assert_eq!(titles(&report.trails), vec![vec!["Bags", "Canvas Tote Bag"]]);
    assert_eq!(report.metadata.nodes_visited, 2);
}

#[test]
fn test_repeated_resolution_is_identical() {
    let catalog = apparel();
    assert_eq!(find_trails(&catalog, "p1"), find_trails(&catalog, "p1"));
}

#[test]
fn test_sample_catalog() {
    let document = parse_document(SAMPLE, DocumentFormat::Json).unwrap();
    let resolver = BreadcrumbResolver::new(&document.catalog);

    assert_eq!(
        titles(&resolver.find_trails("p1")),
        vec![
            vec!["Apparel", "Tees", "Oversized Cotton Tee"],
            vec!["Summer Edit", "Essentials", "Oversized Cotton Tee"],
        ]
    );
    assert_eq!(
        resolver.find_trails("p2")[0].to_string(),
        "Apparel > Outerwear > Hoodies > Graphic Hoodie"
    );
    assert_eq!(resolver.find_trails("p3")[0].join(" / "), "Accessories / Bags / Canvas Tote Bag");
    assert!(resolver.find_trails("p4").is_empty());
}

#[test]
fn test_resolver_shared_across_threads() {
    let document = parse_document(SAMPLE, DocumentFormat::Json).unwrap();
    let catalog = &document.catalog;

    let counts: Vec<usize> = std::thread::scope(|scope| {
        let handles: Vec<_> = ["p1", "p2", "p3"]
            .into_iter()
            .map(|id| scope.spawn(move || find_trails(catalog, id).len()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(counts, vec![2, 1, 1]);
}

#[test]
fn test_very_deep_catalog_does_not_overflow() {
    let mut node = CollectionNode::new("Leaf").with_product(Product::new("deep", "Deep Product"));
    for level in 0..100_000 {
        node = CollectionNode::new(format!("Level {}", level)).with_child(node);
    }
    let catalog = Catalog::new(vec![node]);

    let trails = find_trails(&catalog, "deep");
    assert_eq!(trails.len(), 1);
    assert_eq!(trails[0].len(), 100_002);
    assert_eq!(trails[0].segments()[0], "Level 99999");

    drop(trails);
    drop(catalog);
}
