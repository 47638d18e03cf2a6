// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use proteus::model::{
    BoundedContext, Cardinality, CompareOp, ContextId, ContextMap, DomainModel, Expr, Field,
    IntegrationPattern, Invariant, MapId, Morphism, MorphismId, ObjectId, PathEquation,
};
use proteus::validate::{validate_context, validate_model};

// Benchmark identity (keep stable):
// - Group names in this file: `validate.context`, `validate.model`
// - Case IDs must remain stable across refactors so results stay comparable
//   over time (e.g. `small`, `medium`, `large`, `large_with_typos`).

fn oid(name: &str) -> ObjectId {
    ObjectId::new(name).expect("object id")
}

/// A context with `clusters` order-shaped aggregates, each with its own
/// entities, morphisms, and one equation invariant. With `typos`, every
/// fourth cluster points its morphism at a misspelled target to exercise the
/// fuzzy-suggestion path.
fn synthetic_context(clusters: usize, typos: bool) -> BoundedContext {
    let mut ctx = BoundedContext::new(ContextId::new("Synthetic").expect("context id"));
    for i in 0..clusters {
        let order = format!("Order{i}");
        let item = format!("LineItem{i}");
        let aggregate = format!("OrderAggregate{i}");
        ctx.add_entity(
            oid(&order),
            vec![Field::new("total", "Decimal"), Field::new("placed", "DateTime")],
        );
        ctx.add_entity(oid(&item), vec![Field::new("subtotal", "Decimal")]);

        let target = if typos && i % 4 == 0 {
            format!("LineItm{i}")
        } else {
            item.clone()
        };
        ctx.add_morphism(Morphism::new(
            MorphismId::new(format!("items{i}")).expect("morphism id"),
            oid(&order),
            oid(&target),
            Cardinality::Many,
        ));

        ctx.add_aggregate(
            oid(&aggregate),
            oid(&order),
            vec![oid(&item)],
            vec![Invariant::Equation(PathEquation::new(
                "total_matches_items",
                CompareOp::Eq,
                Expr::name("total"),
                Expr::sum(Expr::access(Expr::name(format!("items{i}")), "subtotal")),
            ))],
        );
    }
    ctx
}

/// A model of `contexts` small contexts chained by customer/supplier maps.
fn synthetic_model(contexts: usize) -> DomainModel {
    let mut model = DomainModel::new();
    for i in 0..contexts {
        let mut ctx = BoundedContext::new(
            ContextId::new(format!("Context{i}")).expect("context id"),
        );
        ctx.add_entity(oid("Order"), vec![Field::new("total", "Decimal")]);
        model.add_context(ctx);
    }
    for i in 1..contexts {
        let mut map = ContextMap::new(
            MapId::new(format!("map{i}")).expect("map id"),
            ContextId::new(format!("Context{}", i - 1)).expect("context id"),
            ContextId::new(format!("Context{i}")).expect("context id"),
            IntegrationPattern::CustomerSupplier,
        );
        map.map_object(oid("Order"), oid("Order"));
        model.add_context_map(map);
    }
    model
}

fn benches_validate(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("validate.context");

        for (case_id, clusters, typos) in [
            ("small", 10, false),
            ("medium", 100, false),
            ("large", 500, false),
            ("large_with_typos", 500, true),
        ] {
            let ctx = synthetic_context(clusters, typos);
            let objects = ctx.objects().len() as u64;
            group.throughput(Throughput::Elements(objects));
            group.bench_function(case_id, move |b| {
                b.iter(|| {
                    let result = validate_context(black_box(&ctx));
                    black_box(result.error_count() + result.warning_count())
                })
            });
        }

        group.finish();
    }

    {
        let mut group = c.benchmark_group("validate.model");

        for (case_id, contexts) in [("small", 5), ("medium", 50), ("large", 250)] {
            let model = synthetic_model(contexts);
            group.throughput(Throughput::Elements(contexts as u64));
            group.bench_function(case_id, move |b| {
                b.iter(|| {
                    let result = validate_model(black_box(&model));
                    black_box(result.has_issues())
                })
            });
        }

        group.finish();
    }
}

criterion_group!(benches, benches_validate);
criterion_main!(benches);
