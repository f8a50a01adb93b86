use web_sys::MouseEvent;
use yew::prelude::*;

/// Gradient flavor of a [`LoveButton`].
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    Pink,
    Green,
    Gray,
}

#[derive(Properties, PartialEq)]
pub struct LoveButtonProps {
    #[prop_or(ButtonVariant::Pink)]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    pub children: Children,
}

/// Pill button with a gradient fill and a soft glow overlay. The hover and
/// press feedback is pure CSS; the gradients live in the global stylesheet.
#[function_component(LoveButton)]
pub fn love_button(props: &LoveButtonProps) -> Html {
    let variant_class = match props.variant {
        ButtonVariant::Pink => "love-button-pink",
        ButtonVariant::Green => "love-button-green",
        ButtonVariant::Gray => "love-button-gray",
    };

    html! {
        <button class={classes!("love-button", variant_class)} onclick={props.onclick.clone()}>
            <span class="love-button-glow"></span>
            <span class="love-button-label">{ props.children.clone() }</span>
        </button>
    }
}
