use serde::{Deserialize, Serialize};

/// Sequential ColorBrewer families available to heatmaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scheme {
    #[default]
    Greens,
    Blues,
    YlOrBr,
}

const MIN_COLORS: usize = 3;
const MAX_COLORS: usize = 9;

const GREENS: [&[&str]; 7] = [
    &["#e5f5e0", "#a1d99b", "#31a354"],
    &["#edf8e9", "#bae4b3", "#74c476", "#238b45"],
    &["#edf8e9", "#bae4b3", "#74c476", "#31a354", "#006d2c"],
    &["#edf8e9", "#c7e9c0", "#a1d99b", "#74c476", "#31a354", "#006d2c"],
    &["#edf8e9", "#c7e9c0", "#a1d99b", "#74c476", "#41ab5d", "#238b45", "#005a32"],
    &["#f7fcf5", "#e5f5e0", "#c7e9c0", "#a1d99b", "#74c476", "#41ab5d", "#238b45", "#005a32"],
    &[
        "#f7fcf5", "#e5f5e0", "#c7e9c0", "#a1d99b", "#74c476", "#41ab5d", "#238b45", "#006d2c",
        "#00441b",
    ],
];

const BLUES: [&[&str]; 7] = [
    &["#deebf7", "#9ecae1", "#3182bd"],
    &["#eff3ff", "#bdd7e7", "#6baed6", "#2171b5"],
    &["#eff3ff", "#bdd7e7", "#6baed6", "#3182bd", "#08519c"],
    &["#eff3ff", "#c6dbef", "#9ecae1", "#6baed6", "#3182bd", "#08519c"],
    &["#eff3ff", "#c6dbef", "#9ecae1", "#6baed6", "#4292c6", "#2171b5", "#084594"],
    &["#f7fbff", "#deebf7", "#c6dbef", "#9ecae1", "#6baed6", "#4292c6", "#2171b5", "#084594"],
    &[
        "#f7fbff", "#deebf7", "#c6dbef", "#9ecae1", "#6baed6", "#4292c6", "#2171b5", "#08519c",
        "#08306b",
    ],
];

const YL_OR_BR: [&[&str]; 7] = [
    &["#fff7bc", "#fec44f", "#d95f0e"],
    &["#ffffd4", "#fed98e", "#fe9929", "#cc4c02"],
    &["#ffffd4", "#fed98e", "#fe9929", "#d95f0e", "#993404"],
    &["#ffffd4", "#fee391", "#fec44f", "#fe9929", "#d95f0e", "#993404"],
    &["#ffffd4", "#fee391", "#fec44f", "#fe9929", "#ec7014", "#cc4c02", "#8c2d04"],
    &["#ffffe5", "#fff7bc", "#fee391", "#fec44f", "#fe9929", "#ec7014", "#cc4c02", "#8c2d04"],
    &[
        "#ffffe5", "#fff7bc", "#fee391", "#fec44f", "#fe9929", "#ec7014", "#cc4c02", "#993404",
        "#662506",
    ],
];

impl Scheme {
    /// The scheme row with `count` colours. Counts outside the published
    /// 3..=9 range are clamped, so callers must check the returned length.
    pub fn colors(self, count: usize) -> Vec<String> {
        let rows = match self {
            Scheme::Greens => &GREENS,
            Scheme::Blues => &BLUES,
            Scheme::YlOrBr => &YL_OR_BR,
        };
        let index = count.clamp(MIN_COLORS, MAX_COLORS) - MIN_COLORS;
        rows[index].iter().map(|color| color.to_string()).collect()
    }
}
