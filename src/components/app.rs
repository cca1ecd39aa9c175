use super::virtual_cursor::VirtualCursor;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone, Default)]
pub struct AppProps {
    /// The interface being driven. Anything goes here; it receives the
    /// synthesized input exactly as if a hardware mouse were attached.
    #[prop_or_default]
    pub children: Children,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <div id="root" style="position:relative; width:100%; height:100vh; overflow:hidden; background:#1e1e1e;">
            { for props.children.iter() }
            <VirtualCursor />
        </div>
    }
}
