use yew::prelude::*;

use crate::card::effects::{self, HEART_COUNT, SPARKLE_COUNT, SPARKLE_PULSE_SECS};

#[derive(Properties, PartialEq)]
pub struct FieldProps {
    /// Fixed layout seed, for reproducing a particular scatter.
    #[prop_or_default]
    pub seed: Option<u64>,
}

/// Two big blurred color blobs drifting behind everything on fixed paths.
#[function_component(GradientBlobs)]
pub fn gradient_blobs() -> Html {
    html! {
        <div class="backdrop-layer">
            <style>
                {r#"
                    @keyframes blob-drift-a {
                        0%   { transform: translate(0, 0); }
                        33%  { transform: translate(120px, -140px); }
                        66%  { transform: translate(-100px, 80px); }
                        100% { transform: translate(0, 0); }
                    }
                    @keyframes blob-drift-b {
                        0%   { transform: translate(0, 0); }
                        33%  { transform: translate(-140px, 120px); }
                        66%  { transform: translate(100px, -100px); }
                        100% { transform: translate(0, 0); }
                    }
                    .blob-a {
                        position: absolute;
                        top: 0;
                        left: 0;
                        width: 350px;
                        height: 350px;
                        background: #f472b6;
                        opacity: 0.4;
                        filter: blur(140px);
                        border-radius: 50%;
                        animation: blob-drift-a 35s linear infinite;
                    }
                    .blob-b {
                        position: absolute;
                        right: 0;
                        bottom: 0;
                        width: 400px;
                        height: 400px;
                        background: #f43f5e;
                        opacity: 0.4;
                        filter: blur(160px);
                        border-radius: 50%;
                        animation: blob-drift-b 40s linear infinite;
                    }
                "#}
            </style>
            <div class="blob-a"></div>
            <div class="blob-b"></div>
        </div>
    }
}

/// Twenty-five sparkles, scattered once per mount, pulsing in place on a
/// fixed period.
#[function_component(Sparkles)]
pub fn sparkles(props: &FieldProps) -> Html {
    let seed = props.seed;
    let items = use_state(move || {
        let mut rng = effects::layout_rng(seed);
        effects::scatter(&mut rng, SPARKLE_COUNT)
    });

    html! {
        <div class="backdrop-layer">
            <style>
                {r#"
                    @keyframes sparkle-pulse {
                        0%   { transform: translateY(-10px); opacity: 0.2; }
                        50%  { transform: translateY(10px); opacity: 0.8; }
                        100% { transform: translateY(-10px); opacity: 0.2; }
                    }
                    .sparkle {
                        position: absolute;
                        color: #fff;
                        animation-name: sparkle-pulse;
                        animation-timing-function: ease-in-out;
                        animation-iteration-count: infinite;
                    }
                "#}
            </style>
            {
                for items.iter().enumerate().map(|(i, item)| html! {
                    <span
                        key={i.to_string()}
                        class="sparkle"
                        style={format!(
                            "left: {:.2}%; top: {:.2}%; font-size: {:.0}px; animation-duration: {}s;",
                            item.left * 100.0,
                            item.top * 100.0,
                            item.scale * 20.0,
                            SPARKLE_PULSE_SECS,
                        )}
                    >
                        {"✨"}
                    </span>
                })
            }
        </div>
    }
}

/// Forty hearts rising slowly out of the top of the viewport, each on its
/// own randomized period.
#[function_component(FloatingHearts)]
pub fn floating_hearts(props: &FieldProps) -> Html {
    let seed = props.seed;
    let items = use_state(move || {
        let mut rng = effects::layout_rng(seed);
        effects::scatter(&mut rng, HEART_COUNT)
    });

    html! {
        <div class="backdrop-layer">
            <style>
                {r#"
                    @keyframes heart-rise {
                        from { transform: translateY(0); }
                        to   { transform: translateY(-20vh); }
                    }
                    .heart {
                        position: absolute;
                        animation-name: heart-rise;
                        animation-timing-function: linear;
                        animation-iteration-count: infinite;
                    }
                    .heart-glyph {
                        display: inline-block;
                    }
                "#}
            </style>
            {
                for items.iter().enumerate().map(|(i, item)| {
                    let glyph = match i % 3 {
                        0 => "💖",
                        1 => "💕",
                        _ => "💗",
                    };
                    html! {
                        <span
                            key={i.to_string()}
                            class="heart"
                            style={format!(
                                "left: {:.2}%; top: {:.2}%; animation-duration: {:.1}s;",
                                item.left * 100.0,
                                item.top * 100.0,
                                item.duration,
                            )}
                        >
                            <span
                                class="heart-glyph"
                                style={format!("transform: scale({:.2});", item.scale)}
                            >
                                { glyph }
                            </span>
                        </span>
                    }
                })
            }
        </div>
    }
}
