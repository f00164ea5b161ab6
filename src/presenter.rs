use minijinja::{context, Environment};
use serde::Serialize;
use crate::config::Page;
use crate::errors::PresenterError;
use crate::models::weather_sample::WeatherSample;
use crate::predictor::Outcome;

const PAGE_TEMPLATE: &str = include_str!("../templates/page.html");

const CHART_WIDTH: f64 = 720.0;
const CHART_HEIGHT: f64 = 360.0;
const CHART_MARGIN: f64 = 20.0;
const CHART_LABEL_SPACE: f64 = 50.0;
const BAR_FILL: f64 = 0.6;

#[derive(Serialize)]
struct InputField {
    key: &'static str,
    label: &'static str,
    value: String,
}

#[derive(Serialize)]
struct TableRow {
    parameter: &'static str,
    value: String,
}

#[derive(Serialize)]
struct Callout {
    state: &'static str,
    value: Option<String>,
    message: Option<String>,
}

#[derive(Serialize, Debug, PartialEq)]
struct Bar {
    feature: &'static str,
    value: String,
    x: String,
    y: String,
    width: String,
    height: String,
    center: String,
}

#[derive(Serialize, Debug, PartialEq)]
struct Chart {
    width: f64,
    height: f64,
    baseline: String,
    label_y: String,
    bars: Vec<Bar>,
}

/// Renders the full page from a weather sample and the outcome of the prediction step.
///
/// Rendering holds no state between calls, the same input always gives the same page.
pub struct Presenter {
    env: Environment<'static>,
    page: Page,
}

impl Presenter {
    /// Returns a presenter with the page template compiled
    ///
    /// # Arguments
    ///
    /// * 'page' - titles and footer for the page
    pub fn new(page: Page) -> Result<Self, PresenterError> {
        let mut env = Environment::new();
        env.add_template("page.html", PAGE_TEMPLATE)?;

        Ok(Self { env, page })
    }

    /// Renders the page
    ///
    /// # Arguments
    ///
    /// * 'sample' - the weather readings currently in the form
    /// * 'outcome' - result of the prediction step, if it was requested
    pub fn render(&self, sample: &WeatherSample, outcome: &Outcome) -> Result<String, PresenterError> {
        let template = self.env.get_template("page.html")?;

        let html = template.render(context! {
            title => &self.page.title,
            subtitle => &self.page.subtitle,
            footer => &self.page.footer,
            fields => input_fields(sample),
            rows => summary_table(sample),
            callout => callout(outcome),
            chart => bar_chart(sample),
        })?;

        Ok(html)
    }
}

fn input_fields(sample: &WeatherSample) -> Vec<InputField> {
    sample.features()
        .map(|(f, v)| InputField { key: f.key, label: f.label, value: v.to_string() })
        .collect()
}

fn summary_table(sample: &WeatherSample) -> Vec<TableRow> {
    sample.features()
        .map(|(f, v)| TableRow { parameter: f.name, value: v.to_string() })
        .collect()
}

fn callout(outcome: &Outcome) -> Callout {
    match outcome {
        Outcome::NotRequested => Callout { state: "idle", value: None, message: None },
        Outcome::Predicted(v) => Callout { state: "predicted", value: Some(format!("{:.4}", v)), message: None },
        Outcome::Failed(e) => Callout { state: "failed", value: None, message: Some(e.clone()) },
    }
}

/// Lays out one bar per feature around a zero baseline so negative readings point downward
fn bar_chart(sample: &WeatherSample) -> Chart {
    let plot_height = CHART_HEIGHT - CHART_MARGIN - CHART_LABEL_SPACE;
    let slot = (CHART_WIDTH - 2.0 * CHART_MARGIN) / 7.0;

    let row = sample.to_row();
    let finite = row.iter().copied().filter(|v| v.is_finite());
    let top = finite.clone().fold(0.0_f64, f64::max);
    let bottom = finite.fold(0.0_f64, f64::min);
    // halved so the span of two extreme values of opposite sign stays finite
    let half_range = if top / 2.0 - bottom / 2.0 > 0.0 { top / 2.0 - bottom / 2.0 } else { 1.0 };

    let to_y = |v: f64| CHART_MARGIN + (top / 2.0 - v.clamp(bottom, top) / 2.0) / half_range * plot_height;
    let baseline = to_y(0.0);

    let bars = sample.features()
        .enumerate()
        .map(|(i, (f, v))| {
            let v_plot = if v.is_finite() { v } else { 0.0 };
            let y = to_y(v_plot.max(0.0));
            let height = to_y(v_plot.min(0.0)) - y;
            let x = CHART_MARGIN + slot * i as f64 + slot * (1.0 - BAR_FILL) / 2.0;
            Bar {
                feature: f.name,
                value: bar_value(v),
                x: format!("{:.2}", x),
                y: format!("{:.2}", y),
                width: format!("{:.2}", slot * BAR_FILL),
                height: format!("{:.2}", height),
                center: format!("{:.2}", CHART_MARGIN + slot * (i as f64 + 0.5)),
            }
        })
        .collect();

    Chart {
        width: CHART_WIDTH,
        height: CHART_HEIGHT,
        baseline: format!("{:.2}", baseline),
        label_y: format!("{:.2}", CHART_HEIGHT - CHART_LABEL_SPACE / 2.0),
        bars,
    }
}

fn bar_value(v: f64) -> String {
    if v.abs() >= 1e6 {
        format!("{:.3e}", v)
    } else {
        format!("{:.1}", v)
    }
}
