#![allow(clippy::unwrap_used)]
//! Concurrency contract: readers retrying around in-flight recomputes
//! never observe a version regression or a partially merged snapshot.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio_util::sync::CancellationToken;

use typesys::base::SourceId;
use typesys::builder::StaticProvider;
use typesys::decl::{AttributeDecl, DeclPayload, ItemDecl, LocalDeclaration};
use typesys::state::ModelStateService;

fn product_half(module: &str, qualifier: &str) -> LocalDeclaration {
    LocalDeclaration {
        name: "Product".into(),
        module: module.into(),
        source: SourceId::new(""),
        position: 0,
        is_custom: false,
        payload: DeclPayload::Item(ItemDecl {
            attributes: vec![AttributeDecl {
                qualifier: qualifier.into(),
                value_type: Some("java.lang.String".into()),
                ..AttributeDecl::default()
            }],
            ..ItemDecl::default()
        }),
    }
}

#[test]
fn concurrent_readers_see_monotone_consistent_snapshots() {
    let mut provider = StaticProvider::new();
    let a = SourceId::new("a/a-items.xml");
    let b = SourceId::new("b/b-items.xml");
    provider.set_source(a.clone(), vec![product_half("a", "code")]);
    provider.set_source(b.clone(), vec![product_half("b", "ean")]);

    let service = Arc::new(ModelStateService::new());
    service.recompute(&provider, &CancellationToken::new());

    let done = AtomicBool::new(false);
    std::thread::scope(|scope| {
        let service = &service;
        let provider = &provider;
        let done = &done;

        for _ in 0..3 {
            scope.spawn(move || {
                let mut last_version = 0;
                while !done.load(Ordering::Acquire) {
                    if let Some(model) = service.get().ready() {
                        assert!(
                            model.version() >= last_version,
                            "version regressed from {last_version} to {}",
                            model.version()
                        );
                        last_version = model.version();

                        // Both halves contribute in every published
                        // snapshot; a partial merge would show one.
                        let product = model.find_item("Product").unwrap();
                        assert_eq!(product.declarations().len(), 2);
                        assert_eq!(product.payload().attributes.len(), 2);
                    }
                    std::thread::yield_now();
                }
            });
        }

        scope.spawn(move || {
            for _ in 0..25 {
                service.enqueue([a.clone(), b.clone()]);
                service.recompute(provider, &CancellationToken::new());
            }
            done.store(true, Ordering::Release);
        });
    });
}
