use serde_json::{json, Value};
use vizkit::{build_chart, ChartOptions, Config, Dataset, VizError, VizKind};

fn load(name: &str) -> Dataset {
    Dataset::from_path(format!("test/{}", name)).expect("Failed to read test CSV")
}

fn chart(kind: VizKind, data: &str, options: ChartOptions) -> Value {
    let dataset = load(data);
    let build = build_chart(kind, &dataset, &options, &Config::default()).unwrap();
    build.document.to_value().unwrap()
}

fn chart_err(kind: VizKind, data: &str, options: ChartOptions) -> VizError {
    let dataset = load(data);
    build_chart(kind, &dataset, &options, &Config::default()).unwrap_err()
}

#[test]
fn test_bar_positional_defaults() {
    let doc = chart(VizKind::Bar, "tings.csv", ChartOptions::default());
    assert_eq!(doc["encoding"]["x"], json!({"field": "name", "type": "nominal"}));
    assert_eq!(doc["encoding"]["y"], json!({"field": "amount", "type": "quantitative"}));
    assert_eq!(doc["mark"], json!({"type": "bar", "clip": true}));
    assert_eq!(doc["data"]["values"].as_array().unwrap().len(), 5);
    assert_eq!(doc["data"]["values"][4], json!({"name": "Ellie", "amount": 42}));
}

#[test]
fn test_bar_fill_without_color_sort() {
    let options = ChartOptions {
        colorvar: Some("name".to_string()),
        ..Default::default()
    };
    let doc = chart(VizKind::Bar, "tings.csv", options);
    assert_eq!(doc["encoding"]["fill"]["field"], "name");
    assert_eq!(doc["encoding"]["fill"]["legend"], json!({"orient": "right"}));
    assert!(doc["encoding"].get("order").is_none());
}

#[test]
fn test_bar_color_sort() {
    let options = ChartOptions {
        xvar: Some("product".to_string()),
        yvar: Some("revenue".to_string()),
        colorvar: Some("region".to_string()),
        color_sort: Some("asc".to_string()),
        ..Default::default()
    };
    let doc = chart(VizKind::Bar, "fruits.csv", options);
    assert_eq!(
        doc["encoding"]["order"],
        json!({"field": "region", "type": "nominal", "sort": "ascending"})
    );
}

#[test]
fn test_area_normalized_without_colorvar() {
    let options = ChartOptions {
        normalized: true,
        ..Default::default()
    };
    let err = chart_err(VizKind::Area, "stocks.csv", options);
    assert!(matches!(err, VizError::ConflictingArgs(_)));
    assert!(err.to_string().contains("normalized"));
}

#[test]
fn test_area_normalized() {
    let options = ChartOptions {
        xvar: Some("date".to_string()),
        yvar: Some("price".to_string()),
        colorvar: Some("company".to_string()),
        normalized: true,
        ..Default::default()
    };
    let doc = chart(VizKind::Area, "stocks.csv", options);
    assert_eq!(doc["encoding"]["x"], json!({"field": "date", "type": "temporal"}));
    assert_eq!(doc["encoding"]["y"]["stack"], "normalize");
    assert_eq!(doc["encoding"]["y"]["axis"], json!({"format": "%"}));
    assert_eq!(doc["mark"]["type"], "area");
}

#[test]
fn test_hist_bincount() {
    let options = ChartOptions {
        xvar: Some("amount".to_string()),
        bincount: Some(5),
        ..Default::default()
    };
    let doc = chart(VizKind::Histogram, "tings.csv", options);
    assert_eq!(doc["encoding"]["x"]["bin"]["maxbins"], 5);
    assert_eq!(doc["encoding"]["y"], json!({"aggregate": "count", "type": "quantitative"}));
}

#[test]
fn test_hist_step_wins() {
    let options = ChartOptions {
        xvar: Some("val".to_string()),
        bincount: Some(5),
        binstepsize: Some(0.5),
        ..Default::default()
    };
    let doc = chart(VizKind::Histogram, "vals.csv", options);
    let bin = doc["encoding"]["x"]["bin"].as_object().unwrap();
    assert_eq!(bin.get("step"), Some(&json!(0.5)));
    assert!(!bin.contains_key("maxbins"));
}

#[test]
fn test_hist_horizontal_swaps_size() {
    let options = ChartOptions {
        xvar: Some("amount".to_string()),
        is_horizontal: true,
        ..Default::default()
    };
    let doc = chart(VizKind::Histogram, "tings.csv", options);
    assert_eq!(doc["width"], 400);
    assert_eq!(doc["height"], 600);
    assert_eq!(doc["encoding"]["y"]["bin"], json!(true));
}

#[test]
fn test_stream_center_stack() {
    let options = ChartOptions {
        xvar: Some("date".to_string()),
        yvar: Some("price".to_string()),
        colorvar: Some("company".to_string()),
        ..Default::default()
    };
    let doc = chart(VizKind::Stream, "stocks.csv", options);
    assert_eq!(doc["encoding"]["y"]["stack"], "center");
    let y = doc["encoding"]["y"].as_object().unwrap();
    assert_eq!(y.get("axis"), Some(&Value::Null));
    assert_eq!(doc["mark"]["type"], "area");
}

#[test]
fn test_heatmap() {
    let options = ChartOptions {
        colorvar: Some("temp".to_string()),
        ..Default::default()
    };
    let doc = chart(VizKind::Heatmap, "hot.csv", options);
    assert_eq!(doc["mark"]["type"], "rect");
    assert_eq!(doc["width"], 500);
    assert_eq!(doc["height"], 500);
    assert_eq!(doc["encoding"]["fill"]["scale"], json!({"scheme": "goldgreen"}));

    let err = chart_err(VizKind::Heatmap, "hot.csv", ChartOptions::default());
    assert!(matches!(err, VizError::MissingDataReference(_)));
}

#[test]
fn test_line_uses_stroke() {
    let options = ChartOptions {
        xvar: Some("date".to_string()),
        yvar: Some("price".to_string()),
        colorvar: Some("company".to_string()),
        color_list: Some("red,blue".to_string()),
        ..Default::default()
    };
    let doc = chart(VizKind::Line, "stocks.csv", options);
    assert!(doc["encoding"].get("fill").is_none());
    assert_eq!(doc["encoding"]["stroke"]["scale"], json!({"range": ["red", "blue"]}));
}

#[test]
fn test_scatter_size_legend_hidden() {
    let options = ChartOptions {
        xvar: Some("id".to_string()),
        yvar: Some("val".to_string()),
        sizevar: Some("val".to_string()),
        no_legend: true,
        ..Default::default()
    };
    let doc = chart(VizKind::Scatter, "vals.csv", options);
    let size = doc["encoding"]["size"].as_object().unwrap();
    assert_eq!(size.get("legend"), Some(&Value::Null));
    assert_eq!(doc["mark"]["type"], "point");
}

#[test]
fn test_faceted_chart() {
    let options = ChartOptions {
        xvar: Some("product".to_string()),
        yvar: Some("revenue".to_string()),
        facetvar: Some("region".to_string()),
        facet_columns: Some(2),
        ..Default::default()
    };
    let doc = chart(VizKind::Bar, "fruits.csv", options);
    assert_eq!(doc["resolve"], json!({"axis": {"x": "independent"}}));
    assert_eq!(doc["encoding"]["facet"]["columns"], 2);
    assert_eq!(doc["encoding"]["facet"]["spacing"], 20);
    assert_eq!(doc["width"], 250);
}

#[test]
fn test_shorthand_aggregate_and_title() {
    let options = ChartOptions {
        xvar: Some("product|Fruit".to_string()),
        yvar: Some("sum(revenue)|Total".to_string()),
        ..Default::default()
    };
    let doc = chart(VizKind::Bar, "fruits.csv", options);
    assert_eq!(
        doc["encoding"]["y"],
        json!({"field": "revenue", "aggregate": "sum", "type": "quantitative", "title": "Total"})
    );
    assert_eq!(doc["encoding"]["x"]["title"], "Fruit");
}

#[test]
fn test_invalid_reference_names_shorthand() {
    let options = ChartOptions {
        xvar: Some("nope(amount".to_string()),
        ..Default::default()
    };
    let err = chart_err(VizKind::Bar, "tings.csv", options);
    assert!(err.is_usage_error());
    assert!(err.to_string().contains("'nope(amount'"));
}

#[test]
fn test_unused_option_warning() {
    let dataset = load("tings.csv");
    let options = ChartOptions {
        normalized: true,
        ..Default::default()
    };
    let build = build_chart(VizKind::Line, &dataset, &options, &Config::default()).unwrap();
    assert_eq!(build.warnings, vec!["'normalized' is not used by line charts"]);
}

#[test]
fn test_config_sizes() {
    let dataset = load("tings.csv");
    let config = Config {
        chart_width: Some(900),
        ..Default::default()
    };
    let build = build_chart(VizKind::Bar, &dataset, &ChartOptions::default(), &config).unwrap();
    let doc = build.document.to_value().unwrap();
    assert_eq!(doc["width"], 900);
    assert_eq!(doc["height"], 400);
}

#[test]
fn test_limits_and_interactive() {
    let options = ChartOptions {
        ylim: Some("0,50".to_string()),
        is_interactive: true,
        title: Some("Tings".to_string()),
        ..Default::default()
    };
    let doc = chart(VizKind::Bar, "tings.csv", options);
    assert_eq!(doc["encoding"]["y"]["scale"], json!({"domain": [0, 50]}));
    assert_eq!(doc["selection"]["pan_zoom"]["bind"], "scales");
    assert_eq!(doc["title"], "Tings");
}

#[test]
fn test_color_list_colors_plain_mark() {
    let options = ChartOptions {
        xvar: Some("date".to_string()),
        yvar: Some("price".to_string()),
        color_list: Some(" deeppink , red,blue".to_string()),
        ..Default::default()
    };
    let dataset = load("stocks.csv");
    let build = build_chart(VizKind::Line, &dataset, &options, &Config::default()).unwrap();
    assert!(build.warnings.is_empty());
    let doc = build.document.to_value().unwrap();
    assert_eq!(doc["mark"], json!({"type": "line", "clip": true, "color": "deeppink"}));
    assert!(doc["encoding"].get("stroke").is_none());
}

#[test]
fn test_empty_colorvar_counts_as_missing() {
    let options = ChartOptions {
        colorvar: Some(String::new()),
        ..Default::default()
    };
    let err = chart_err(VizKind::Heatmap, "fruits.csv", options);
    assert!(matches!(err, VizError::MissingDataReference(_)));

    let options = ChartOptions {
        colorvar: Some(String::new()),
        normalized: true,
        ..Default::default()
    };
    let err = chart_err(VizKind::Area, "stocks.csv", options);
    assert!(matches!(err, VizError::ConflictingArgs(_)));
}

#[test]
fn test_horizontal_bar_sorted_by_value() {
    let options = ChartOptions {
        sortx_var: Some("-y".to_string()),
        is_horizontal: true,
        ..Default::default()
    };
    let doc = chart(VizKind::Bar, "tings.csv", options);
    assert_eq!(
        doc["encoding"]["y"],
        json!({"field": "name", "type": "nominal", "sort": "-x"})
    );
    assert_eq!(doc["encoding"]["x"]["field"], "amount");
    assert!(doc["encoding"]["x"].get("sort").is_none());
}
