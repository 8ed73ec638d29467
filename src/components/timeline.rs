use yew::prelude::*;

use crate::catalog::Game;
use crate::dispatch::MARKER_CLASS;
use crate::model::MarkerRef;

const HIGHLIGHT_SHADOW: &str = "0 0 15px rgba(0,0,0,0.5)";

#[derive(Properties, PartialEq, Clone)]
pub struct TimelineProps {
    pub game: Game,
    pub highlighted: Option<MarkerRef>,
}

#[function_component]
pub fn Timeline(props: &TimelineProps) -> Html {
    let markers = props.game.markers.iter().enumerate().map(|(index, m)| {
        let mref = MarkerRef {
            game: props.game.number,
            index,
        };
        // Markers have no children so the click target is always the marker itself.
        let shadow = if props.highlighted == Some(mref) {
            HIGHLIGHT_SHADOW
        } else {
            "none"
        };
        let style = format!(
            "position:absolute; left:{:.2}%; top:50%; width:14px; height:14px; margin:-7px 0 0 -7px; border-radius:50%; background:{}; border:2px solid #0d1117; cursor:pointer; box-shadow:{};",
            m.offset_percent(),
            m.side.color(),
            shadow
        );
        html! {
            <div
                class={classes!(MARKER_CLASS)}
                data-event={m.event.clone()}
                data-marker={mref.to_string()}
                title={format!("{}'", m.minute)}
                {style}
            />
        }
    });
    html! {<div class="timeline" style="position:relative; height:40px; margin:24px 8px 8px 8px;">
        <div style="position:absolute; left:0; right:0; top:50%; height:4px; margin-top:-2px; background:#30363d; border-radius:2px;"></div>
        { for markers }
        <div style="position:absolute; left:0; top:100%; font-size:11px; opacity:0.6;">{"0'"}</div>
        <div style="position:absolute; right:0; top:100%; font-size:11px; opacity:0.6;">{"90'"}</div>
    </div>}
}
