//! Hero backdrop rendering

use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{
        Paragraph,
        canvas::{Canvas, Line as CanvasLine},
    },
};

use crate::app::App;
use crate::scene::project_mesh;
use crate::theme::{BG_PRIMARY, SCENE_CUBE, SCENE_SPHERE, SCENE_TORUS, TEXT_MUTED, lerp_color};

/// How strongly the wireframes show through the page background.
const SCENE_OPACITY: f32 = 0.45;

/// Draw the wireframes behind the hero. `skip` rows of the hero are above
/// the viewport and `hero_height` is its full height, so a partly scrolled
/// hero shows the matching slice of the scene.
pub fn render_scene(frame: &mut Frame, rect: Rect, skip: u16, hero_height: u32, app: &App) {
    let Some(scene) = &app.scene else {
        let placeholder = Paragraph::new(Line::styled("Loading...", Style::default().fg(TEXT_MUTED)))
            .alignment(Alignment::Right);
        frame.render_widget(placeholder, Rect { height: 1, ..rect });
        return;
    };

    let full = f64::from(hero_height.max(1));
    let y_top = 1.0 - 2.0 * f64::from(skip) / full;
    let y_bottom = 1.0 - 2.0 * (f64::from(skip) + f64::from(rect.height)) / full;
    // Cells are about twice as tall as they are wide.
    let half_width = f64::from(rect.width) / (2.0 * full);

    let [sphere, cube, torus] = app.scene_poses();
    let meshes = [
        (&scene.sphere, sphere, SCENE_SPHERE),
        (&scene.cube, cube, SCENE_CUBE),
        (&scene.torus, torus, SCENE_TORUS),
    ];

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .background_color(BG_PRIMARY)
        .x_bounds([-half_width, half_width])
        .y_bounds([y_bottom, y_top])
        .paint(|ctx| {
            for (mesh, pose, color) in &meshes {
                let color = lerp_color(BG_PRIMARY, *color, SCENE_OPACITY);
                for ((x1, y1), (x2, y2)) in project_mesh(mesh, *pose) {
                    ctx.draw(&CanvasLine::new(x1, y1, x2, y2, color));
                }
            }
        });
    frame.render_widget(canvas, rect);
}
