// File: crates/twinplot-core/src/chart.rs
// Summary: TwinChart struct and headless PNG/RGBA rendering pipeline using Skia CPU raster surfaces.

use skia_safe as skia;

use crate::axis::{Axis, YAxis};
use crate::error::{ChartError, Result};
use crate::geometry::RectI32;
use crate::layout::{chart_ticks, tight_insets, AxisTicks, LABEL_GAP, TICK_GAP, TICK_LEN};
use crate::scale::LinearScale;
use crate::series::Series;
use crate::text::{TextMetrics, TextShaper};
use crate::theme::Theme;
use crate::types::{Insets, FONT_SIZE, HEIGHT, WIDTH};
use crate::view::{padded_range, union_all, Bounds};

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    /// Margins used when `tight_layout` is off.
    pub insets: Insets,
    /// Size margins from the labels instead of `insets`.
    pub tight_layout: bool,
    pub theme: Theme,
    pub draw_labels: bool,
    pub draw_grid: bool,
    pub font_size: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            tight_layout: true,
            theme: Theme::default(),
            draw_labels: true,
            draw_grid: false,
            font_size: FONT_SIZE,
        }
    }
}

/// One figure: a shared x-axis and two independent y-axes.
#[derive(Clone, Debug)]
pub struct TwinChart {
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_left: Axis,
    pub y_right: Axis,
}

impl Default for TwinChart {
    fn default() -> Self { Self::new() }
}

impl TwinChart {
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_left: Axis::default_y(),
            y_right: Axis::default_y(),
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn y_axis(&self, side: YAxis) -> &Axis {
        match side {
            YAxis::Left => &self.y_left,
            YAxis::Right => &self.y_right,
        }
    }

    pub fn y_axis_mut(&mut self, side: YAxis) -> &mut Axis {
        match side {
            YAxis::Left => &mut self.y_left,
            YAxis::Right => &mut self.y_right,
        }
    }

    /// Series drawn against `side`.
    pub fn series_on(&self, side: YAxis) -> impl Iterator<Item = &Series> {
        self.series.iter().filter(move |s| s.y_axis == side)
    }

    fn bounds_on(&self, side: YAxis) -> Option<Bounds> {
        union_all(self.series_on(side).map(Series::bounds))
    }

    /// Fit every `Auto` axis to its data, padded by `margin` of the span.
    /// `Fixed` axes are left untouched.
    pub fn autoscale_axes(&mut self, margin: f64) {
        let all = union_all(self.series.iter().map(Series::bounds));
        if !self.x_axis.is_fixed() {
            let (lo, hi) = padded_range(all.map(|b| (b.x_min, b.x_max)), margin);
            self.x_axis.min = lo;
            self.x_axis.max = hi;
        }
        for side in [YAxis::Left, YAxis::Right] {
            if self.y_axis(side).is_fixed() { continue; }
            let b = self.bounds_on(side);
            let (lo, hi) = padded_range(b.map(|b| (b.y_min, b.y_max)), margin);
            let axis = self.y_axis_mut(side);
            axis.min = lo;
            axis.max = hi;
        }
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Render to encoded PNG bytes in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to unpremultiplied RGBA8 pixels: `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.render_surface(opts)?;
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::ReadPixels);
        }
        Ok((pixels, opts.width as u32, opts.height as u32, stride))
    }

    fn render_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(ChartError::Surface { width: opts.width, height: opts.height })?;
        tracing::debug!(width = opts.width, height = opts.height, series = self.series.len(), "render chart");
        self.draw(surface.canvas(), opts);
        Ok(surface)
    }

    /// Draw the whole figure onto `canvas`.
    pub fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        let shaper = TextShaper::new();

        canvas.clear(theme.background);

        let insets = if opts.tight_layout { tight_insets(self, opts, &shaper) } else { opts.insets };
        let area = RectI32::plot_area(opts.width, opts.height, &insets);
        let (l, t, r, b) = (area.left as f32, area.top as f32, area.right as f32, area.bottom as f32);

        let sx = LinearScale::horizontal(&self.x_axis, l, r);
        let sl = LinearScale::vertical(&self.y_left, t, b);
        let sr = LinearScale::vertical(&self.y_right, t, b);
        let (xt, lt, rt) = chart_ticks(self);

        if opts.draw_grid {
            draw_grid(canvas, &area, &xt, &lt, &sx, &sl, theme.grid);
        }

        // Series, clipped to the plot area
        canvas.save();
        canvas.clip_rect(area.to_skia(), skia::ClipOp::Intersect, true);
        for s in &self.series {
            let sy = match s.y_axis {
                YAxis::Left => &sl,
                YAxis::Right => &sr,
            };
            draw_line_series(canvas, &sx, sy, s);
        }
        canvas.restore();

        draw_frame(canvas, &area, theme.axis_line);
        draw_tick_marks(canvas, &area, &xt, &lt, &rt, &sx, &sl, &sr, theme.tick);

        if !opts.draw_labels { return; }

        let fs = opts.font_size;
        let marks = TICK_LEN + TICK_GAP;

        // X tick labels
        let x_color = self.x_axis.color.unwrap_or(theme.tick);
        let (_, xh) = xt.extent(&shaper, fs);
        for (v, label) in xt.values.iter().zip(&xt.labels) {
            shaper.draw_centered(canvas, label, sx.to_px(*v), b + marks + xh * 0.5, fs, x_color);
        }

        // Left tick labels, right-aligned against the tick marks
        let l_color = self.y_left.color.unwrap_or(theme.tick);
        let (lw, _) = lt.extent(&shaper, fs);
        for (v, label) in lt.values.iter().zip(&lt.labels) {
            let (w, h) = shaper.measure(label, fs);
            shaper.draw_at(canvas, label, l - marks - w, sl.to_px(*v) - h * 0.5, fs, l_color);
        }

        // Right tick labels
        let r_color = self.y_right.color.unwrap_or(theme.tick);
        let (rw, _) = rt.extent(&shaper, fs);
        for (v, label) in rt.values.iter().zip(&rt.labels) {
            let (_, h) = shaper.measure(label, fs);
            shaper.draw_at(canvas, label, r + marks, sr.to_px(*v) - h * 0.5, fs, r_color);
        }

        // Axis labels
        let mid_x = (l + r) * 0.5;
        let mid_y = (t + b) * 0.5;
        if !self.x_axis.label.is_empty() {
            let (_, h) = shaper.measure(&self.x_axis.label, fs);
            let color = self.x_axis.color.unwrap_or(theme.axis_label);
            shaper.draw_centered(canvas, &self.x_axis.label, mid_x, b + marks + xh + LABEL_GAP + h * 0.5, fs, color);
        }
        if !self.y_left.label.is_empty() {
            let (_, h) = shaper.measure(&self.y_left.label, fs);
            let color = self.y_left.color.unwrap_or(theme.axis_label);
            shaper.draw_vertical(canvas, &self.y_left.label, l - marks - lw - LABEL_GAP - h * 0.5, mid_y, fs, color);
        }
        if !self.y_right.label.is_empty() {
            let (_, h) = shaper.measure(&self.y_right.label, fs);
            let color = self.y_right.color.unwrap_or(theme.axis_label);
            shaper.draw_vertical(canvas, &self.y_right.label, r + marks + rw + LABEL_GAP + h * 0.5, mid_y, fs, color);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn draw_grid(
    canvas: &skia::Canvas,
    area: &RectI32,
    xt: &AxisTicks,
    yt: &AxisTicks,
    sx: &LinearScale,
    sy: &LinearScale,
    color: skia::Color,
) {
    let paint = stroke_paint(color, 1.0);
    let (l, t, r, b) = (area.left as f32, area.top as f32, area.right as f32, area.bottom as f32);

    // verticals
    for &v in &xt.values {
        let x = sx.to_px(v);
        canvas.draw_line((x, t), (x, b), &paint);
    }
    // horizontals follow the left axis
    for &v in &yt.values {
        let y = sy.to_px(v);
        canvas.draw_line((l, y), (r, y), &paint);
    }
}

fn draw_frame(canvas: &skia::Canvas, area: &RectI32, color: skia::Color) {
    let paint = stroke_paint(color, 1.0);
    canvas.draw_rect(area.to_skia(), &paint);
}

#[allow(clippy::too_many_arguments)]
fn draw_tick_marks(
    canvas: &skia::Canvas,
    area: &RectI32,
    xt: &AxisTicks,
    lt: &AxisTicks,
    rt: &AxisTicks,
    sx: &LinearScale,
    sl: &LinearScale,
    sr: &LinearScale,
    color: skia::Color,
) {
    let paint = stroke_paint(color, 1.0);
    let (l, r, b) = (area.left as f32, area.right as f32, area.bottom as f32);

    for &v in &xt.values {
        let x = sx.to_px(v);
        canvas.draw_line((x, b), (x, b + TICK_LEN), &paint);
    }
    for &v in &lt.values {
        let y = sl.to_px(v);
        canvas.draw_line((l - TICK_LEN, y), (l, y), &paint);
    }
    for &v in &rt.values {
        let y = sr.to_px(v);
        canvas.draw_line((r, y), (r + TICK_LEN, y), &paint);
    }
}

fn draw_line_series(canvas: &skia::Canvas, sx: &LinearScale, sy: &LinearScale, series: &Series) {
    let stroke = stroke_paint(series.color, series.line_width);

    for run in series.finite_runs() {
        if run.len() < 2 {
            continue;
        }
        let mut path = skia::Path::new();
        let (x0, y0) = run[0];
        path.move_to((sx.to_px(x0), sy.to_px(y0)));
        for &(x, y) in run.iter().skip(1) {
            path.line_to((sx.to_px(x), sy.to_px(y)));
        }
        canvas.draw_path(&path, &stroke);
    }
}
