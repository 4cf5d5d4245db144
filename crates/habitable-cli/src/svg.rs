//! SVG rendering of a projected scene.
//!
//! The view is square with the star at its center. Scene coordinates are in
//! AU with y pointing up; SVG y points down, so y is flipped on the way out.

use std::fmt::{self, Write};

use nalgebra::Point2;

use star_system::{MarkerCategory, Scene, SceneRenderer};

const ZONE_COLOR: &str = "green";
const ZONE_FILL_OPACITY: f64 = 0.2;
const ORBIT_COLOR: &str = "#999999";
const STAR_COLOR: &str = "yellow";
const STAR_RADIUS_PX: f64 = 8.0;
const MARKER_RADIUS_PX: f64 = 5.0;

pub fn marker_color(category: MarkerCategory) -> &'static str {
    match category {
        MarkerCategory::PotentiallyHabitable => "blue",
        MarkerCategory::NotHabitable => "red",
    }
}

fn legend_label(category: MarkerCategory) -> &'static str {
    match category {
        MarkerCategory::PotentiallyHabitable => "Potentially habitable",
        MarkerCategory::NotHabitable => "Not habitable",
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvgRenderer {
    /// Width and height of the image (px)
    pub size: f64,
    /// Space kept free around the outermost circle (px)
    pub margin: f64,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self {
            size: 800.0,
            margin: 80.0,
        }
    }
}

impl SvgRenderer {
    /// Pixels per AU for a scene of the given extent
    pub fn scale(&self, extent: f64) -> f64 {
        let usable = (self.size / 2.0 - self.margin).max(1.0);
        if extent > 0.0 { usable / extent } else { usable }
    }

    /// Scene point (AU) to pixel coordinates
    pub fn to_pixels(&self, point: &Point2<f64>, scale: f64) -> (f64, f64) {
        let center = self.size / 2.0;
        (center + point.x * scale, center - point.y * scale)
    }
}

impl SceneRenderer for SvgRenderer {
    type Output = Result<String, fmt::Error>;

    fn render(&self, scene: &Scene) -> Self::Output {
        let mut svg = String::new();
        self.write_scene(&mut svg, scene, self.scale(scene.extent))
            .map(|_| svg)
    }
}

impl SvgRenderer {
    fn write_scene(&self, svg: &mut String, scene: &Scene, scale: f64) -> fmt::Result {
        let size = self.size;
        writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
        )?;
        writeln!(svg, "<title>{}</title>", escape(&scene.title))?;
        writeln!(svg, r#"<rect width="100%" height="100%" fill="white"/>"#)?;

        // Zone fill: outer disc minus inner disc
        let fill = &scene.zone.fill;
        let (cx, cy) = self.to_pixels(&fill.center, scale);
        writeln!(
            svg,
            r#"<path d="{} {}" fill="{ZONE_COLOR}" fill-opacity="{ZONE_FILL_OPACITY}" fill-rule="evenodd"/>"#,
            disc_path(cx, cy, fill.outer_radius * scale),
            disc_path(cx, cy, fill.inner_radius * scale),
        )?;

        for boundary in [&scene.zone.inner_boundary, &scene.zone.outer_boundary] {
            let (x, y) = self.to_pixels(&boundary.center, scale);
            writeln!(
                svg,
                r#"<circle cx="{x:.2}" cy="{y:.2}" r="{:.2}" fill="none" stroke="{ZONE_COLOR}" stroke-width="1.5" stroke-dasharray="6 4"/>"#,
                boundary.radius * scale
            )?;
        }

        for planet in &scene.planets {
            let (x, y) = self.to_pixels(&planet.orbit.center, scale);
            writeln!(
                svg,
                r#"<circle cx="{x:.2}" cy="{y:.2}" r="{:.2}" fill="none" stroke="{ORBIT_COLOR}" stroke-width="0.5"/>"#,
                planet.orbit.radius * scale
            )?;
        }

        let (sx, sy) = self.to_pixels(&scene.star.position, scale);
        writeln!(
            svg,
            r#"<circle cx="{sx:.2}" cy="{sy:.2}" r="{STAR_RADIUS_PX}" fill="{STAR_COLOR}" stroke="orange"/>"#
        )?;
        writeln!(
            svg,
            r#"<text x="{:.2}" y="{:.2}" font-size="12" text-anchor="middle">{} ({})</text>"#,
            sx,
            sy - STAR_RADIUS_PX - 4.0,
            escape(&scene.star.label),
            scene.star.spectral_class
        )?;

        for planet in &scene.planets {
            let marker = &planet.marker;
            let (x, y) = self.to_pixels(&marker.position, scale);
            writeln!(
                svg,
                r#"<circle cx="{x:.2}" cy="{y:.2}" r="{MARKER_RADIUS_PX}" fill="{}"/>"#,
                marker_color(marker.category)
            )?;
        }

        self.write_axis(svg, scene, scale)?;
        self.write_legend(svg, scene)?;
        writeln!(
            svg,
            r#"<text x="{:.2}" y="30" font-size="18" text-anchor="middle">{}</text>"#,
            size / 2.0,
            escape(&scene.title)
        )?;

        writeln!(svg, "</svg>")
    }

    /// Horizontal axis from the star out to the scene extent
    fn write_axis(&self, svg: &mut String, scene: &Scene, scale: f64) -> fmt::Result {
        let (x0, _) = self.to_pixels(&Point2::origin(), scale);
        let (x1, _) = self.to_pixels(&Point2::new(scene.extent, 0.0), scale);
        let baseline = self.size - self.margin / 2.0;

        writeln!(
            svg,
            r#"<line x1="{x0:.2}" y1="{baseline:.2}" x2="{x1:.2}" y2="{baseline:.2}" stroke="black"/>"#
        )?;
        for (x, label) in [(x0, 0.0), (x1, scene.extent)] {
            writeln!(
                svg,
                r#"<line x1="{x:.2}" y1="{:.2}" x2="{x:.2}" y2="{:.2}" stroke="black"/>"#,
                baseline - 4.0,
                baseline + 4.0
            )?;
            writeln!(
                svg,
                r#"<text x="{x:.2}" y="{:.2}" font-size="10" text-anchor="middle">{label:.2}</text>"#,
                baseline + 16.0
            )?;
        }
        writeln!(
            svg,
            r#"<text x="{:.2}" y="{:.2}" font-size="12" text-anchor="middle">{}</text>"#,
            (x0 + x1) / 2.0,
            baseline + 16.0,
            escape(&scene.axis_label)
        )
    }

    /// One legend row per planet, then the two marker categories
    fn write_legend(&self, svg: &mut String, scene: &Scene) -> fmt::Result {
        let x = self.margin / 4.0;
        let mut y = self.margin / 2.0 + 20.0;

        for planet in &scene.planets {
            let marker = &planet.marker;
            writeln!(
                svg,
                r#"<circle cx="{:.2}" cy="{:.2}" r="{MARKER_RADIUS_PX}" fill="{}"/>"#,
                x + MARKER_RADIUS_PX,
                y - MARKER_RADIUS_PX + 1.0,
                marker_color(marker.category)
            )?;
            writeln!(
                svg,
                r#"<text x="{:.2}" y="{y:.2}" font-size="12">{}</text>"#,
                x + 3.0 * MARKER_RADIUS_PX,
                escape(&marker.label)
            )?;
            y += 16.0;
        }

        for category in [MarkerCategory::PotentiallyHabitable, MarkerCategory::NotHabitable] {
            writeln!(
                svg,
                r#"<text x="{x:.2}" y="{y:.2}" font-size="10" fill="{}">{}</text>"#,
                marker_color(category),
                legend_label(category)
            )?;
            y += 14.0;
        }
        Ok(())
    }
}

/// Closed circle as a path, for even-odd fills
fn disc_path(cx: f64, cy: f64, r: f64) -> String {
    format!(
        "M {:.2} {cy:.2} a {r:.2} {r:.2} 0 1 0 {:.2} 0 a {r:.2} {r:.2} 0 1 0 {:.2} 0 Z",
        cx - r,
        2.0 * r,
        -2.0 * r
    )
}

/// Escape text for use in SVG content and attributes
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    escaped
}
