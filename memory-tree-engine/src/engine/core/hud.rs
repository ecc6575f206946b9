use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use constants::palette;
use constants::tree::{FOLIAGE_COUNT, PLACARD_COUNT};

use crate::choreography::focus::ZoomSignal;
use crate::gesture::signals::{GestureSignals, ScenePhase};

#[derive(Component)]
pub struct FpsText;

#[derive(Component)]
pub struct StatusText;

pub fn spawn_hud(mut commands: Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new(format!(
                    "{PLACARD_COUNT} placards · {}K needles",
                    FOLIAGE_COUNT / 1000
                )),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(palette::srgb(palette::GOLD)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    left: Val::Px(12.0),
                    ..default()
                },
            ));
            parent.spawn((
                Text::new("O scatter · F form · Z zoom · arrows sway"),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.6, 0.6)),
                Node {
                    position_type: PositionType::Absolute,
                    top: Val::Px(10.0),
                    left: Val::Px(12.0),
                    ..default()
                },
                StatusText,
            ));
            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 0.0, 0.0)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
        });
}

pub fn fps_text_update_system(
    diagnostics: Res<DiagnosticsStore>,
    mut query: Query<&mut Text, With<FpsText>>,
) {
    for mut text in &mut query {
        if let Some(fps) = diagnostics.get(&FrameTimeDiagnosticsPlugin::FPS) {
            if let Some(value) = fps.smoothed() {
                text.0 = format!("FPS: {value:.1}");
            }
        }
    }
}

pub fn status_text_update_system(
    signals: Res<GestureSignals>,
    zoom: Res<ZoomSignal>,
    mut query: Query<&mut Text, With<StatusText>>,
) {
    for mut text in &mut query {
        let phase = match signals.phase {
            ScenePhase::Formed => "formed",
            ScenePhase::Chaos => "scattered",
        };
        let zoom_label = if zoom.is_zoomed { " · zoomed" } else { "" };
        text.0 = format!("{phase}{zoom_label} · O scatter · F form · Z zoom · arrows sway");
    }
}
