use super::*;
use crate::player::{HighScore, PlayerScore};
use crate::save;

/// Spawn the game-over overlay centred over the frozen field.
///
/// Shows the final score next to the best score on record.  The session
/// score is only *committed* to the high score (and written to disk) when
/// the player returns to the menu.
pub fn setup_game_over(mut commands: Commands, score: Res<PlayerScore>, high: Res<HighScore>) {
    let best = high.best.max(score.points);

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.82)),
            ZIndex(300),
            GameOverRoot,
        ))
        .with_children(|overlay| {
            overlay
                .spawn((
                    Node {
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        padding: UiRect::all(Val::Px(40.0)),
                        row_gap: Val::Px(16.0),
                        border: UiRect::all(Val::Px(2.0)),
                        min_width: Val::Px(320.0),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.06, 0.02, 0.02)),
                    BorderColor::all(Color::srgb(0.55, 0.10, 0.10)),
                ))
                .with_children(|card| {
                    card.spawn((
                        Text::new("GAME OVER"),
                        TextFont {
                            font_size: 46.0,
                            ..default()
                        },
                        TextColor(Color::srgb(1.0, 0.22, 0.22)),
                    ));

                    spacer(card, 4.0);

                    card.spawn((
                        Text::new(format!("Score: {}   Best: {}", score.points, best)),
                        TextFont {
                            font_size: 18.0,
                            ..default()
                        },
                        TextColor(subtitle_color()),
                    ));

                    spacer(card, 8.0);

                    card.spawn((
                        Button,
                        Node {
                            width: Val::Px(220.0),
                            height: Val::Px(50.0),
                            justify_content: JustifyContent::Center,
                            align_items: AlignItems::Center,
                            border: UiRect::all(Val::Px(2.0)),
                            ..default()
                        },
                        BackgroundColor(start_bg()),
                        BorderColor::all(start_border()),
                        GameOverMenuButton,
                    ))
                    .with_children(|btn| {
                        btn.spawn((
                            Text::new("MAIN MENU"),
                            TextFont {
                                font_size: 18.0,
                                ..default()
                            },
                            TextColor(start_text()),
                        ));
                    });

                    card.spawn((
                        Button,
                        Node {
                            width: Val::Px(220.0),
                            height: Val::Px(50.0),
                            justify_content: JustifyContent::Center,
                            align_items: AlignItems::Center,
                            border: UiRect::all(Val::Px(2.0)),
                            ..default()
                        },
                        BackgroundColor(quit_bg()),
                        BorderColor::all(quit_border()),
                        MenuQuitButton,
                    ))
                    .with_children(|btn| {
                        btn.spawn((
                            Text::new("QUIT"),
                            TextFont {
                                font_size: 18.0,
                                ..default()
                            },
                            TextColor(quit_text()),
                        ));
                    });

                    spacer(card, 4.0);

                    card.spawn((
                        Text::new("Press Enter to return to the menu"),
                        TextFont {
                            font_size: 12.0,
                            ..default()
                        },
                        TextColor(hint_color()),
                    ));
                });
        });
}

/// Recursively despawn all game-over overlay entities.
pub fn cleanup_game_over(mut commands: Commands, query: Query<Entity, With<GameOverRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

/// Handle Main Menu / Quit actions in the game-over overlay.
///
/// Returning to the menu folds the session score into [`HighScore`] and
/// writes it to disk; a write failure is logged and otherwise ignored.
#[allow(clippy::type_complexity)]
pub fn game_over_button_system(
    menu_query: Query<(&Interaction, &Children), (Changed<Interaction>, With<GameOverMenuButton>)>,
    quit_query: Query<(&Interaction, &Children), (Changed<Interaction>, With<MenuQuitButton>)>,
    mut btn_text: Query<&mut TextColor>,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: MessageWriter<bevy::app::AppExit>,
    keys: Res<ButtonInput<KeyCode>>,
    score: Res<PlayerScore>,
    mut high: ResMut<HighScore>,
) {
    let wants_menu = keys.just_pressed(KeyCode::Enter)
        || menu_query.iter().any(|(i, _)| *i == Interaction::Pressed);

    if wants_menu {
        if score.points > high.best {
            high.best = score.points;
        }
        if let Err(err) = save::write_high_score(high.best) {
            error!("Failed to save high score: {err}");
        }
        next_state.set(GameState::MainMenu);
        return;
    }

    for (interaction, children) in menu_query.iter() {
        match interaction {
            Interaction::Hovered => {
                for child in children.iter() {
                    if let Ok(mut color) = btn_text.get_mut(child) {
                        *color = TextColor(Color::WHITE);
                    }
                }
            }
            Interaction::None => {
                for child in children.iter() {
                    if let Ok(mut color) = btn_text.get_mut(child) {
                        *color = TextColor(start_text());
                    }
                }
            }
            Interaction::Pressed => {}
        }
    }

    for (interaction, children) in quit_query.iter() {
        match interaction {
            Interaction::Pressed => {
                exit.write(bevy::app::AppExit::Success);
            }
            Interaction::Hovered => {
                for child in children.iter() {
                    if let Ok(mut color) = btn_text.get_mut(child) {
                        *color = TextColor(Color::WHITE);
                    }
                }
            }
            Interaction::None => {
                for child in children.iter() {
                    if let Ok(mut color) = btn_text.get_mut(child) {
                        *color = TextColor(quit_text());
                    }
                }
            }
        }
    }
}
