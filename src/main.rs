use log::{info, Level};
use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod card {
    pub mod effects;
    pub mod state;
}
mod components {
    pub mod background;
    pub mod buttons;
}
mod pages {
    pub mod card;
}

use pages::card::Card;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering card page");
            html! { <Card /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    // Page-shell styles only. Animation keyframes live next to the
    // components that use them.
    let global_css = css!(
        r#"
            html, body {
                margin: 0;
                padding: 0;
            }

            body {
                min-height: 100vh;
                font-family: 'Segoe UI', 'Helvetica Neue', Arial, sans-serif;
                color: #fff;
                background: linear-gradient(135deg, #ff758f 0%, #ff8fa3 50%, #ffd1dc 100%);
                overflow-x: hidden;
            }

            .card-stage {
                min-height: 100vh;
                width: 100%;
                display: flex;
                align-items: center;
                justify-content: center;
                padding: 0 16px;
                position: relative;
                overflow: hidden;
            }

            .backdrop-layer {
                position: fixed;
                top: 0;
                right: 0;
                bottom: 0;
                left: 0;
                pointer-events: none;
            }

            .card-section {
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 24px;
                text-align: center;
                position: relative;
                z-index: 10;
            }

            .cursive-title {
                font-family: cursive;
                font-weight: normal;
                font-size: 30px;
                margin: 0;
            }

            .celebration-title {
                font-size: 30px;
                font-weight: bold;
                margin: 0;
            }

            .screen-gif {
                width: 176px;
            }

            .screen-gif-large {
                width: 208px;
            }

            .screen-text {
                max-width: 320px;
                margin: 0;
            }

            .screen-text-wide {
                max-width: 384px;
            }

            .love-button {
                position: relative;
                padding: 12px 28px;
                border: none;
                border-radius: 9999px;
                font-weight: bold;
                font-size: 16px;
                color: #fff;
                cursor: pointer;
                box-shadow: 0 20px 40px rgba(0, 0, 0, 0.25);
                overflow: hidden;
                transition: transform 0.15s ease;
            }

            .love-button:hover {
                transform: scale(1.1);
            }

            .love-button:active {
                transform: scale(0.95);
            }

            .love-button-pink {
                background: linear-gradient(to right, #f472b6, #f43f5e, #ef4444);
            }

            .love-button-green {
                background: linear-gradient(to right, #34d399, #22c55e, #059669);
            }

            .love-button-gray {
                background: linear-gradient(to right, #e5e7eb, #d1d5db);
                color: #000;
            }

            .love-button-glow {
                position: absolute;
                top: 0;
                right: 0;
                bottom: 0;
                left: 0;
                background: #fff;
                opacity: 0.2;
                filter: blur(24px);
            }

            .love-button-label {
                position: relative;
                z-index: 1;
            }

            .polaroid {
                background: #fff;
                padding: 12px;
                border-radius: 16px;
                box-shadow: 0 20px 40px rgba(0, 0, 0, 0.2);
                transform: rotate(-2deg);
            }

            .polaroid img {
                width: 256px;
                border-radius: 12px;
                display: block;
            }

            .letter-note {
                background: #fff6e5;
                color: #000;
                padding: 24px;
                border-radius: 12px;
                max-width: 384px;
                box-shadow: 0 20px 40px rgba(0, 0, 0, 0.2);
                position: relative;
                text-align: left;
            }

            .letter-rule {
                position: absolute;
                left: 12px;
                top: 0;
                bottom: 0;
                width: 4px;
                background: #f87171;
            }

            .letter-note p {
                font-size: 14px;
                line-height: 1.6;
                margin: 0;
            }

            .letter-note p.letter-heading {
                margin-top: 16px;
                font-weight: 600;
            }

            .letter-note ul {
                list-style: disc;
                margin: 4px 0 0;
                padding-left: 20px;
                font-size: 14px;
            }

            .answer-row {
                display: flex;
                gap: 16px;
                flex-wrap: wrap;
                justify-content: center;
            }

            .answer-scale {
                transition: transform 0.3s ease;
            }
        "#
    );

    html! {
        <>
            <Global css={global_css} />
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");
    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
