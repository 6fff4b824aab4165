//! In-game HUD: score, high score, the lives row, and the round banner.
//!
//! The HUD tree is spawned once at startup and toggled by state — it is
//! hidden behind the main menu and visible everywhere else.
//!
//! | System                  | Schedule | Purpose                             |
//! |-------------------------|----------|-------------------------------------|
//! | `setup_hud`             | Startup  | Spawn the permanent HUD nodes       |
//! | `hud_visibility_system` | Update   | Show/hide the HUD per state         |
//! | `hud_display_system`    | Update   | Refresh score / lives / banner text |

use crate::menu::GameState;
use crate::player::{HighScore, PlayerLives, PlayerScore};
use crate::round::CurrentLevel;
use bevy::prelude::*;

// ── Component markers ─────────────────────────────────────────────────────────

/// Root node of the HUD tree; hidden while in the main menu.
#[derive(Component)]
pub struct HudRoot;

/// Tags the score readout.
#[derive(Component)]
pub struct ScoreText;

/// Tags the high-score readout.
#[derive(Component)]
pub struct HighScoreText;

/// Tags the lives row (one ship glyph per life).
#[derive(Component)]
pub struct LivesText;

/// Tags the centre banner ("ROUND N" during the interlude).
#[derive(Component)]
pub struct BannerText;

// ── Plugin ────────────────────────────────────────────────────────────────────

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_hud)
            .add_systems(Update, (hud_visibility_system, hud_display_system));
    }
}

// ── Startup ───────────────────────────────────────────────────────────────────

/// Spawn the permanent HUD: score top-left with the lives row under it,
/// high score top-centre, and the (usually empty) centre banner.
pub fn setup_hud(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                ..default()
            },
            Visibility::Hidden,
            HudRoot,
        ))
        .with_children(|root| {
            root.spawn((
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Px(14.0),
                    top: Val::Px(10.0),
                    flex_direction: FlexDirection::Column,
                    ..default()
                },
            ))
            .with_children(|corner| {
                corner.spawn((
                    Text::new("0"),
                    TextFont {
                        font_size: 30.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.95, 0.88, 0.45)),
                    ScoreText,
                ));
                corner.spawn((
                    Text::new("▲ ▲ ▲"),
                    TextFont {
                        font_size: 18.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.82, 0.88, 0.95)),
                    LivesText,
                ));
            });

            root.spawn((
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Percent(0.0),
                    top: Val::Px(12.0),
                    width: Val::Percent(100.0),
                    justify_content: JustifyContent::Center,
                    ..default()
                },
            ))
            .with_children(|center| {
                center.spawn((
                    Text::new("HIGH SCORE 0"),
                    TextFont {
                        font_size: 18.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.55, 0.55, 0.65)),
                    HighScoreText,
                ));
            });

            root.spawn((
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Percent(0.0),
                    top: Val::Percent(42.0),
                    width: Val::Percent(100.0),
                    justify_content: JustifyContent::Center,
                    ..default()
                },
            ))
            .with_children(|center| {
                center.spawn((
                    Text::new(""),
                    TextFont {
                        font_size: 46.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.95, 0.88, 0.45)),
                    BannerText,
                ));
            });
        });
}

// ── Update ────────────────────────────────────────────────────────────────────

/// Show the HUD in every state except the main menu.
pub fn hud_visibility_system(
    state: Res<State<GameState>>,
    mut query: Query<&mut Visibility, With<HudRoot>>,
) {
    if !state.is_changed() {
        return;
    }
    let vis = match state.get() {
        GameState::MainMenu => Visibility::Hidden,
        _ => Visibility::Visible,
    };
    for mut visibility in query.iter_mut() {
        *visibility = vis;
    }
}

/// Refresh the score, high score, lives row, and round banner.
#[allow(clippy::type_complexity)]
pub fn hud_display_system(
    state: Res<State<GameState>>,
    score: Res<PlayerScore>,
    high: Res<HighScore>,
    lives: Res<PlayerLives>,
    level: Res<CurrentLevel>,
    mut q_score: Query<&mut Text, With<ScoreText>>,
    mut q_high: Query<&mut Text, (With<HighScoreText>, Without<ScoreText>)>,
    mut q_lives: Query<&mut Text, (With<LivesText>, Without<ScoreText>, Without<HighScoreText>)>,
    mut q_banner: Query<
        &mut Text,
        (
            With<BannerText>,
            Without<ScoreText>,
            Without<HighScoreText>,
            Without<LivesText>,
        ),
    >,
) {
    if let Ok(mut text) = q_score.single_mut() {
        *text = Text::new(format!("{}", score.points));
    }

    if let Ok(mut text) = q_high.single_mut() {
        *text = Text::new(format!("HIGH SCORE {}", high.best));
    }

    if let Ok(mut text) = q_lives.single_mut() {
        let count = lives.remaining.max(0) as usize;
        let glyphs: Vec<&str> = std::iter::repeat("▲").take(count).collect();
        *text = Text::new(glyphs.join(" "));
    }

    if let Ok(mut text) = q_banner.single_mut() {
        *text = match state.get() {
            GameState::RoundIntro => Text::new(format!("ROUND {}", level.0)),
            _ => Text::new(""),
        };
    }
}
