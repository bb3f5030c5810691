use stockquery::{
    ComparisonOp, Metric, QueryInterpreter, QueryKind, QueryMode, SearchTarget, StockQueryError,
};

fn interpreter() -> QueryInterpreter {
    QueryInterpreter::builtin().expect("built-in catalog loads")
}

#[test]
fn sector_with_filter_end_to_end() {
    let interpreter = interpreter();
    let spec = interpreter.interpret("sector materials with PE under 100");
    match &spec.kind {
        QueryKind::ListBySectorWithFilter { sector, filter } => {
            assert_eq!(sector, "Materials");
            assert_eq!(filter.metric, Metric::Pe);
            assert_eq!(filter.op, ComparisonOp::Lt);
            assert_eq!(filter.value(), 100.0);
        }
        other => panic!("unexpected {other:?}"),
    }

    let request = interpreter.search_request("sector materials with PE under 100");
    assert_eq!(
        request.filter.as_deref(),
        Some("Sector eq 'Materials' and PE lt 100.0")
    );
    assert_eq!(request.search_text, "*");
    assert_eq!(request.top, 50);
    assert!(request.count);
}

#[test]
fn index_with_filter_end_to_end() {
    let request = interpreter().search_request("nifty 50 stocks with pe below 20");
    assert_eq!(
        request.filter.as_deref(),
        Some("AllIndices/any(i: i eq 'NIFTY50') and PE lt 20.0")
    );
    assert_eq!(request.select, vec!["Symbol", "SymbolRaw", "Name", "PE", "AllIndices"]);
}

#[test]
fn index_listing() {
    let interpreter = interpreter();
    let spec = interpreter.interpret("nifty 50 stocks");
    assert_eq!(
        spec.kind,
        QueryKind::ListByIndex {
            index: "NIFTY50".to_string()
        }
    );
    let compiled = interpreter.compile("nifty 50 stocks");
    assert_eq!(compiled.top, 50);
    assert!(compiled.count);
}

#[test]
fn company_name_is_not_a_sector() {
    let interpreter = interpreter();
    let spec = interpreter.interpret("axis bank");
    assert_eq!(spec.mode(), QueryMode::SingleStockOverview);
    let entity = spec.kind.entity().expect("entity");
    assert!(entity.text.to_lowercase().contains("axis bank"));

    let request = interpreter.search_request("axis bank");
    assert_eq!(request.filter, None);
    assert_eq!(request.top, 1);
    assert_eq!(request.search_fields, vec!["SymbolRaw", "Name", "Symbol"]);
}

#[test]
fn single_stock_metric() {
    let interpreter = interpreter();
    let spec = interpreter.interpret("pe of reliance");
    match &spec.kind {
        QueryKind::SingleStockMetric { entity, metric } => {
            assert_eq!(entity.text, "reliance");
            assert_eq!(*metric, Metric::Pe);
        }
        other => panic!("unexpected {other:?}"),
    }
    let request = interpreter.search_request("pe of reliance");
    assert_eq!(request.top, 1);
    assert_eq!(request.select, vec!["Symbol", "SymbolRaw", "Name", "PE"]);
}

#[test]
fn free_text_company_keeps_original_casing() {
    let spec = interpreter().interpret("What is the EPS of Zomato?");
    match &spec.kind {
        QueryKind::SingleStockMetric { entity, metric } => {
            assert_eq!(entity.text, "Zomato");
            assert_eq!(entity.symbol, None);
            assert_eq!(*metric, Metric::Eps);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn whole_market_filter() {
    let request = interpreter().search_request("companies with market cap above 500000");
    assert_eq!(request.filter.as_deref(), Some("MarketCapCr gt 500000.0"));
}

#[test]
fn empty_and_blank_inputs() {
    let interpreter = interpreter();
    for input in ["", "   ", "\t\n"] {
        let spec = interpreter.interpret(input);
        assert_eq!(spec.mode(), QueryMode::SingleStockOverview);
        assert_eq!(spec.kind.entity().map(|e| e.text.as_str()), Some(""));
    }
}

#[test]
fn index_and_filter_always_win() {
    let interpreter = interpreter();
    for input in [
        "nifty bank with pb under 2",
        "show reliance in nifty 50 with pe under 30",
        "nifty it technology stocks with eps above 10",
    ] {
        assert_eq!(
            interpreter.interpret(input).mode(),
            QueryMode::ListByIndexWithFilter,
            "{input}"
        );
    }
}

#[test]
fn request_body_and_target() {
    let request = interpreter().search_request("pharma stocks");
    let body = request.body();
    assert_eq!(body["search"], "*");
    assert_eq!(body["filter"], "Sector eq 'Healthcare'");
    assert_eq!(body["count"], true);
    assert!(body.get("searchFields").is_none());

    let target: SearchTarget = serde_json::from_str(
        r#"{ "endpoint": "https://equities.search.windows.net/", "index_name": "stocks" }"#,
    )
    .unwrap();
    assert_eq!(
        target.url(),
        "https://equities.search.windows.net/indexes/stocks/docs/search?api-version=2025-09-01"
    );
}

#[test]
fn lookup_after_resolution() {
    let interpreter = interpreter();
    let spec = interpreter.interpret("highest price of infosys");
    let symbol = spec
        .kind
        .entity()
        .and_then(|entity| entity.symbol.clone())
        .expect("resolved symbol");
    assert_eq!(symbol, "INFY");

    let rendered = interpreter
        .plan_lookup(&symbol, "highest price of infosys")
        .unwrap()
        .render();
    assert!(rendered.query.ends_with("ORDER BY c.Price DESC"));
    assert_eq!(rendered.parameters[0].value, "INFY");

    assert!(matches!(
        interpreter.plan_lookup("", "price"),
        Err(StockQueryError::InvalidInput(_))
    ));
}

#[test]
fn duplicate_alias_fails_catalog_load() {
    let result = stockquery::AliasCatalog::from_json_str(
        r#"{ "metric": [
            { "canonical": "PE", "aliases": ["valuation"] },
            { "canonical": "PB", "aliases": ["valuation"] }
        ] }"#,
    );
    assert!(matches!(result, Err(StockQueryError::DuplicateAlias { .. })));
}

#[test]
fn unplaced_filter_falls_back_to_overview() {
    let spec = interpreter().interpret("energy pe under 20 for infosys");
    assert_eq!(spec.mode(), QueryMode::SingleStockOverview);
    let entity = spec.kind.entity().expect("entity");
    assert_eq!(entity.symbol.as_deref(), Some("INFY"));
}

#[test]
fn glued_numeral_is_not_a_filter() {
    let interpreter = interpreter();
    for input in ["pe under 1e5", "pe under 20x"] {
        let spec = interpreter.interpret(input);
        assert_ne!(spec.mode(), QueryMode::ListByMetricFilter, "{input}");
        assert_eq!(interpreter.search_request(input).filter, None, "{input}");
    }
}
