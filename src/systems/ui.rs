use bevy::prelude::*;

use crate::systems::asteroids::Asteroid;
use crate::systems::bodies::{Moon, Planet};
use crate::systems::comets::Comet;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_hud)
            .add_systems(Update, update_counts);
    }
}

// UI component to display entity counts
#[derive(Component)]
pub struct EntityCounter;

fn setup_hud(mut commands: Commands) {
    // create UI container
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Start,
                justify_content: JustifyContent::Start,
                padding: UiRect::all(Val::Px(20.0)),
                ..default()
            },
            BackgroundColor(Color::NONE),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Loading..."),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                EntityCounter,
            ));

            parent.spawn((
                Text::new("Drag: orbit | Scroll: zoom | Esc: quit"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.6, 0.6)),
                Node {
                    margin: UiRect::top(Val::Px(5.0)), // spacing
                    ..default()
                },
            ));
        });
}

fn update_counts(
    planets: Query<&Planet>,
    moons: Query<&Moon>,
    asteroids: Query<&Asteroid>,
    comets: Query<&Comet>,
    mut text_query: Query<&mut Text, With<EntityCounter>>,
) {
    if let Ok(mut text) = text_query.single_mut() {
        text.0 = format!(
            "Bodies: {} | Moons: {} | Asteroids: {} | Comets: {}",
            planets.iter().count(),
            moons.iter().count(),
            asteroids.iter().count(),
            comets.iter().count(),
        );
    }
}
