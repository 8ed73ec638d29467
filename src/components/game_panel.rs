use super::timeline::Timeline;
use crate::catalog::Game;
use crate::model::MarkerRef;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GamePanelProps {
    pub game: Game,
    pub active: bool,
    pub highlighted: Option<MarkerRef>,
}

#[function_component(GamePanel)]
pub fn game_panel(props: &GamePanelProps) -> Html {
    let display = if props.active { "block" } else { "none" };
    html! {<div
        id={props.game.panel_id()}
        class={classes!("game-content", props.active.then_some("active"))}
        style={format!("display:{display}; background:#161b22; border:1px solid #30363d; border-radius:8px; padding:12px 16px;")}
    >
        <h2 style="margin:0 0 4px 0; font-size:18px;">{ props.game.title.clone() }</h2>
        { if props.game.summary.is_empty() { html!{} } else { html!{ <div style="font-size:13px; opacity:0.75;">{ props.game.summary.clone() }</div> } } }
        <Timeline game={props.game.clone()} highlighted={props.highlighted} />
    </div>}
}
