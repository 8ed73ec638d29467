use yew::prelude::*;

use crate::catalog::Game;
use crate::dispatch::GAME_BUTTON_CLASS;

#[derive(Properties, PartialEq, Clone)]
pub struct GameSelectorProps {
    pub games: Vec<Game>,
    pub active_button: usize,
}

// Buttons carry their target in data attributes; clicks are handled by the root.
#[function_component]
pub fn GameSelector(props: &GameSelectorProps) -> Html {
    html! {<div style="display:flex; gap:8px; justify-content:center; margin-bottom:16px;">
        { for props.games.iter().enumerate().map(|(i, g)| {
            let active = i == props.active_button;
            let style = if active {
                "padding:6px 14px; border-radius:6px; border:1px solid #58a6ff; background:#1f6feb; color:#fff; cursor:pointer;"
            } else {
                "padding:6px 14px; border-radius:6px; border:1px solid #30363d; background:#161b22; color:#c9d1d9; cursor:pointer;"
            };
            html! {
                <button
                    class={classes!(GAME_BUTTON_CLASS, active.then_some("active"))}
                    data-game={g.number.to_string()}
                    data-button={i.to_string()}
                    {style}
                >{ g.button_label() }</button>
            }
        }) }
    </div>}
}
