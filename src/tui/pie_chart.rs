//! Plotters-powered outcome pie chart widget for Ratatui.
//!
//! Why Plotters instead of hand-drawing into Ratatui's `Canvas`?
//! - the `Pie` element handles slice geometry and label placement
//! - easy to extend later (legend, exportable PNG/SVG backends, etc.)
//!
//! We render Plotters output into the Ratatui buffer using
//! `plotters-ratatui-backend`.

use plotters::prelude::*;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// Fixed palette, assigned by outcome order (normal, carrier, affected).
pub const NORMAL_GREEN: RGBColor = RGBColor(74, 222, 128);
pub const CARRIER_AMBER: RGBColor = RGBColor(251, 191, 36);
pub const AFFECTED_RED: RGBColor = RGBColor(248, 113, 113);

/// A lightweight, render-only pie chart description.
///
/// The widget is intentionally data-driven: slice sizes and labels are computed
/// outside the render call. This keeps `render()` focused on drawing and makes
/// it easy to test the data prep separately.
pub struct OutcomePieChart {
    /// Slice sizes in outcome order: normal, carrier, affected.
    pub sizes: [f64; 3],
    /// Slice labels, e.g. `"Normal 68.75%"`.
    pub labels: [String; 3],
}

impl Widget for OutcomePieChart {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // When the available area is too small, Plotters may fail to build the
        // chart. In that case, we render a small hint rather than panicking.
        if area.width < 20 || area.height < 8 {
            buf.set_string(
                area.x,
                area.y,
                "Chart area too small (resize terminal).",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let sum: f64 = self.sizes.iter().sum();
        if !self.sizes.iter().all(|v| v.is_finite() && *v >= 0.0) || sum <= 0.0 {
            return;
        }

        // `plotters-ratatui-backend` draws Plotters primitives via Ratatui's
        // `Canvas` widget, which ultimately writes to the terminal buffer.
        //
        // We delegate rendering to the crate-provided widget helper to avoid
        // coupling our code to its internal backend types.
        let widget = widget_fn(move |root| {
            let dims = root.dim_in_pixel();
            let center = (dims.0 as i32 / 2, dims.1 as i32 / 2);
            // Terminal cells are roughly twice as tall as wide, so the disc
            // renders slightly elliptical. Acceptable for a teaching aid.
            let radius = (dims.0.min(dims.1) as f64 / 2.0 - 1.0).max(1.0);

            let sizes = self.sizes.to_vec();
            let colors = vec![NORMAL_GREEN, CARRIER_AMBER, AFFECTED_RED];
            let labels = self.labels.to_vec();

            let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
            // Start the first slice at 12 o'clock.
            pie.start_angle(-90.0);
            pie.label_style(("sans-serif", 10).into_font().color(&WHITE));

            root.draw(&pie)?;
            Ok(())
        });

        widget.render(area, buf);
    }
}
