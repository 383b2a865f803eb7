use charming::{
    component::{
        Axis, DataView, Feature, Grid, Legend, LegendSelectedMode, LegendType, Restore,
        SaveAsImage, Title, Toolbox, ToolboxDataZoom,
    },
    element::{
        AreaStyle, AxisLabel, AxisPointer, AxisPointerType, AxisType, Emphasis, ItemStyle,
        LineStyle, NameLocation, Orient, SplitLine, Symbol, TextAlign, TextStyle, Tooltip,
    },
    series::{Line, Scatter},
    Chart,
};

pub struct DashboardChart {
    pub inner: Chart,
}

const AXIS_TEXT_SIZE: u32 = 14;
const TOP_MARGIN_WITH_TITLE: f64 = 14.0;
const TOP_MARGIN: f64 = 4.0;
const BOTTOM_MARGIN: f64 = 4.0;
const PANEL_GAP: f64 = 4.0;

/// Canvas region of one panel: the grid (and its axis pair) it draws into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelRegion {
    pub index: usize,
    pub top_pct: f64,
    pub height_pct: f64,
}

impl PanelRegion {
    /// Splits the chart height into `count` equally tall regions, top to bottom.
    pub fn stacked(count: usize, with_title: bool) -> Vec<PanelRegion> {
        if count == 0 {
            return Vec::new();
        }
        let top = if with_title {
            TOP_MARGIN_WITH_TITLE
        } else {
            TOP_MARGIN
        };
        let available = 100.0 - top - BOTTOM_MARGIN;
        let height_pct = (available - PANEL_GAP * (count - 1) as f64) / count as f64;
        (0..count)
            .map(|index| PanelRegion {
                index,
                top_pct: top + index as f64 * (height_pct + PANEL_GAP),
                height_pct,
            })
            .collect()
    }

    fn axis_index(&self) -> f64 {
        self.index as f64
    }
}

impl DashboardChart {
    /// Create a new `DashboardChart` with default tooltip, legend and toolbox.
    pub fn new(title: &str, subtext: &str, dark: bool, strip_title_and_subtext: bool) -> Self {
        let chart = Chart::new();
        let chart = if !strip_title_and_subtext {
            chart.title(
                Title::new()
                    .text(title)
                    .text_align(TextAlign::Center)
                    .subtext(subtext)
                    .text_style(TextStyle::new().font_size(24).font_weight("bold"))
                    .subtext_style(TextStyle::new().font_size(14).line_height(20))
                    .left("50%")
                    .top("1%"),
            )
        } else {
            chart
        };

        let chart = chart
            .tooltip(Tooltip::new().axis_pointer(AxisPointer::new().type_(AxisPointerType::Cross)))
            .legend(
                Legend::new()
                    .show(true)
                    .right("2%")
                    .top("middle")
                    .orient(Orient::Vertical)
                    .selected_mode(LegendSelectedMode::Multiple)
                    .text_style(TextStyle::new().font_size(12))
                    .padding(10)
                    .item_gap(10)
                    .item_width(25)
                    .item_height(14)
                    .type_(LegendType::Scroll),
            )
            .toolbox(
                Toolbox::new().feature(
                    Feature::new()
                        .data_zoom(ToolboxDataZoom::new())
                        .data_view(DataView::new())
                        .restore(Restore::new())
                        .save_as_image(SaveAsImage::new()),
                ),
            );

        let chart = if dark {
            chart.background_color("#242424")
        } else {
            chart
        };

        Self { inner: chart }
    }

    /// Add a grid for `region` with a time X axis bounded to `[0, horizon]` seconds.
    pub fn with_panel(mut self, region: &PanelRegion, y_label: &str, horizon: f64) -> Self {
        let top = format!("{:.2}%", region.top_pct);
        let height = format!("{:.2}%", region.height_pct);
        self.inner = self.inner.grid(
            Grid::new()
                .left("6%")
                .right("16%")
                .top(top.as_str())
                .height(height.as_str()),
        );
        self.inner = self.inner.x_axis(
            Axis::new()
                .type_(AxisType::Value)
                .grid_index(region.axis_index())
                .min(0.0)
                .max(horizon)
                .name_location(NameLocation::End)
                .name_gap(15)
                .axis_label(AxisLabel::new().formatter("{value} s"))
                .split_line(SplitLine::new().show(true)),
        );
        self.inner = self.inner.y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .grid_index(region.axis_index())
                .name(y_label)
                .name_location(NameLocation::End)
                .name_text_style(TextStyle::new().font_size(AXIS_TEXT_SIZE))
                .name_gap(10)
                .position("left")
                .axis_label(AxisLabel::new())
                .split_line(SplitLine::new().show(true)),
        );
        self
    }

    /// Add a line series to the panel at `region`.
    ///
    /// `points` is a list of `[x, y]` pairs. `opacity` tells apart several
    /// metrics of one actor, which all share the actor's color.
    pub fn add_time_series(
        mut self,
        region: &PanelRegion,
        name: &str,
        points: Vec<Vec<f64>>,
        color: &str,
        opacity: f64,
    ) -> Self {
        let line = Line::new()
            .name(name)
            .data(points)
            .show_symbol(false)
            .emphasis(Emphasis::new())
            .line_style(LineStyle::new().width(2).opacity(opacity))
            .item_style(ItemStyle::new().color(color))
            .x_axis_index(region.axis_index())
            .y_axis_index(region.axis_index());

        self.inner = self.inner.series(line);
        self
    }

    /// Add an area series stacked on the previous series of the same `stack`.
    pub fn add_stacked_series(
        mut self,
        region: &PanelRegion,
        name: &str,
        stack: &str,
        points: Vec<Vec<f64>>,
        color: &str,
    ) -> Self {
        let line = Line::new()
            .name(name)
            .stack(stack)
            .data(points)
            .show_symbol(false)
            .area_style(AreaStyle::new().color(color))
            .line_style(LineStyle::new().width(1))
            .item_style(ItemStyle::new().color(color))
            .x_axis_index(region.axis_index())
            .y_axis_index(region.axis_index());

        self.inner = self.inner.series(line);
        self
    }

    /// Add discrete events as points at their recorded times.
    pub fn add_event_series(
        mut self,
        region: &PanelRegion,
        name: &str,
        points: Vec<Vec<f64>>,
        symbol: Symbol,
        color: &str,
        opacity: f64,
    ) -> Self {
        let scatter = Scatter::new()
            .name(name)
            .data(points)
            .symbol(symbol)
            .symbol_size(6.0)
            .item_style(ItemStyle::new().color(color).opacity(opacity))
            .x_axis_index(region.axis_index())
            .y_axis_index(region.axis_index());

        self.inner = self.inner.series(scatter);
        self
    }
}
