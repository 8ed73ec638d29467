use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct EventDisplayProps {
    pub text: String,
}

#[function_component(EventDisplay)]
pub fn event_display(props: &EventDisplayProps) -> Html {
    html! {<div style="margin-top:16px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-height:20px;">
        <div id="event-text" style="font-size:14px;">{ props.text.clone() }</div>
    </div>}
}
