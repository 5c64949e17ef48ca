use bevy::asset::AssetLoadFailedEvent;
use bevy::prelude::*;

use crate::config::MUSIC_PATH;

pub struct MusicPlugin;

impl Plugin for MusicPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, start)
            .add_systems(Update, report_load_failure);
    }
}

// background music is best-effort; the simulation runs silent if the
// file is missing
fn start(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.spawn((
        AudioPlayer::new(asset_server.load(MUSIC_PATH)),
        PlaybackSettings::LOOP,
    ));
}

fn report_load_failure(mut events: EventReader<AssetLoadFailedEvent<AudioSource>>) {
    for event in events.read() {
        warn!("could not load music ({}), continuing without sound", event.path);
    }
}
