use std::env;
use std::path::PathBuf;

use clap::Parser;
use engine::FlowEngine;
use engine::collection::FeatureCollection;
use engine::record::FlowDataset;
use formats::{load_countries_file, load_flows_file};
use layers::Layer;
use layers::arcs::{ArcSnapshot, FlowArcLayer};
use layers::countries::{CountryLayer, CountrySnapshot};
use layers::view::ViewState;
use serde_json::{Value, json};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Funding-flow map snapshot exporter")]
struct Args {
    /// Country shapes dataset (GeoJSON FeatureCollection)
    countries: PathBuf,

    /// Funding-flow records dataset (JSON array)
    flows: PathBuf,

    /// Origin country for the derived arcs (defaults to USA)
    #[arg(long)]
    origin: Option<String>,

    /// Pretty-print the JSON payload
    #[arg(long)]
    pretty: bool,
}

fn main() {
    if let Err(e) = real_main() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    // Base-map credential. Only the background tiles need it; everything
    // derived here renders without one.
    let map_token = env::var("MAPBOX_ACCESS_TOKEN").ok();
    if map_token.is_none() {
        warn!("MAPBOX_ACCESS_TOKEN is not set; the base map layer is disabled");
    }

    let data = load_countries_file(&args.countries)
        .map_err(|e| format!("load {}: {e}", args.countries.display()))?;
    let dataset =
        load_flows_file(&args.flows).map_err(|e| format!("load {}: {e}", args.flows.display()))?;
    info!(
        countries = data.len(),
        records = dataset.records.len(),
        max_outbound = dataset.max_outbound,
        "datasets loaded"
    );

    let mut engine = match &args.origin {
        Some(name) => FlowEngine::with_default_origin(name.clone()),
        None => FlowEngine::new(),
    };
    let summary = engine
        .recalculate(&data, None)
        .map_err(|e| format!("recalculate: {e}"))?;
    if summary.skipped > 0 {
        warn!(
            skipped = summary.skipped,
            "dropped flows with unresolvable destinations"
        );
    }
    info!(emitted = summary.emitted, "arcs derived");

    let payload = build_payload(&engine, &data, &dataset, map_token.is_some());
    let rendered = if args.pretty {
        serde_json::to_string_pretty(&payload)
    } else {
        serde_json::to_string(&payload)
    }
    .map_err(|e| format!("serialize payload: {e}"))?;
    println!("{rendered}");

    Ok(())
}

fn build_payload(
    engine: &FlowEngine,
    data: &FeatureCollection,
    dataset: &FlowDataset,
    base_map: bool,
) -> Value {
    let country_layer = CountryLayer::new(1);
    let arc_layer = FlowArcLayer::for_dataset(2, dataset);

    let mut rng = rand::thread_rng();
    let countries = country_layer.extract(data);
    let arcs = arc_layer.extract(&mut rng, dataset);

    json!({
        "view": view_json(ViewState::default()),
        "base_map_enabled": base_map,
        "layers": [
            countries_json(&country_layer, &countries),
            arcs_json(&arc_layer, &arcs),
        ],
        "selected_arcs": engine
            .arcs()
            .iter()
            .map(|a| json!({
                "source": a.source.to_array(),
                "target": a.target.to_array(),
                "value": a.value,
            }))
            .collect::<Vec<_>>(),
    })
}

fn view_json(view: ViewState) -> Value {
    json!({
        "latitude": view.latitude,
        "longitude": view.longitude,
        "zoom": view.zoom,
        "max_zoom": view.max_zoom,
        "min_zoom": view.min_zoom,
        "pitch": view.pitch,
        "bearing": view.bearing,
    })
}

fn countries_json(layer: &CountryLayer, snapshot: &CountrySnapshot) -> Value {
    json!({
        "id": layer.id().0,
        "kind": "countries",
        "pickable": layer.pickable(),
        "style": {
            "fill": layer.style.fill.to_array(),
            "elevation": layer.style.elevation,
            "line_width": layer.style.line_width,
            "line_width_scale": layer.style.line_width_scale,
            "line_width_min_px": layer.style.line_width_min_px,
        },
        "entries": snapshot
            .entries
            .iter()
            .map(|e| json!({
                "id": e.id.0,
                "name": e.name,
                "centroid": e.centroid.to_array(),
                "radius": e.radius,
            }))
            .collect::<Vec<_>>(),
    })
}

fn arcs_json(layer: &FlowArcLayer, snapshot: &ArcSnapshot) -> Value {
    json!({
        "id": layer.id().0,
        "kind": "flows",
        "pickable": layer.pickable(),
        "max_outbound": layer.max_outbound,
        "entries": snapshot
            .entries
            .iter()
            .map(|e| json!({
                "source": e.source.to_array(),
                "target": e.target.to_array(),
                "fill": e.fill.to_array(),
                "source_color": e.source_color.to_array(),
                "target_color": e.target_color.to_array(),
                "width": e.width,
            }))
            .collect::<Vec<_>>(),
    })
}
