use gloo_timers::callback::Timeout;
use log::info;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::card::state::{CardState, Screen};
use crate::components::background::{FloatingHearts, GradientBlobs, Sparkles};
use crate::components::buttons::{ButtonVariant, LoveButton};
use crate::config;

/// How long the leaving screen animates out before the next one mounts.
/// Must match the section-leave animation below.
const SWAP_MS: u32 = 400;

#[function_component(Card)]
pub fn card() -> Html {
    let state = use_state(CardState::new);
    // What is actually rendered. Lags `state` by one exit animation when the
    // screen changes; follows it immediately otherwise.
    let shown = use_state(CardState::new);
    let leaving = use_state(|| false);

    // ?seed=N pins the decorative scatter, mostly for eyeballing a layout.
    let seed = use_search_param("seed".to_string()).and_then(|raw| raw.parse::<u64>().ok());

    let apply = {
        let state = state.clone();
        let shown = shown.clone();
        let leaving = leaving.clone();
        Callback::from(move |next: CardState| {
            if *leaving {
                return;
            }
            let prev = *state;
            if next == prev {
                return;
            }
            state.set(next);
            if next.screen() == prev.screen() {
                shown.set(next);
            } else {
                info!("screen change: {:?} -> {:?}", prev.screen(), next.screen());
                leaving.set(true);
                let shown = shown.clone();
                let leaving = leaving.clone();
                Timeout::new(SWAP_MS, move || {
                    shown.set(next);
                    leaving.set(false);
                })
                .forget();
            }
        })
    };

    let on_advance = {
        let state = state.clone();
        let apply = apply.clone();
        Callback::from(move |_: MouseEvent| {
            let next = state.advance();
            info!("advancing to step {}", next.step());
            apply.emit(next);
        })
    };

    let on_decline = {
        let state = state.clone();
        let apply = apply.clone();
        Callback::from(move |_: MouseEvent| {
            let next = state.decline();
            info!(
                "declined {} time(s), plea is now {}",
                next.declines(),
                next.decline_label()
            );
            apply.emit(next);
        })
    };

    let on_accept = {
        let state = state.clone();
        let apply = apply.clone();
        Callback::from(move |_: MouseEvent| {
            info!("she said yes after {} declines", state.declines());
            apply.emit(state.accept());
        })
    };

    let section_class = if *leaving {
        "card-section card-section-leave"
    } else {
        "card-section card-section-enter"
    };

    let screen = match shown.screen() {
        Screen::Greeting => greeting_screen(&on_advance),
        Screen::Photo => photo_screen(&on_advance),
        Screen::Letter => letter_screen(&on_advance),
        Screen::Question => question_screen(&*shown, &on_accept, &on_decline),
        Screen::Celebration => celebration_screen(),
    };

    html! {
        <main class="card-stage">
            <style>
                {r#"
                    @keyframes section-enter {
                        from { opacity: 0; transform: translateY(40px); }
                        to   { opacity: 1; transform: translateY(0); }
                    }
                    @keyframes section-leave {
                        from { opacity: 1; transform: translateY(0); }
                        to   { opacity: 0; transform: translateY(-20px); }
                    }
                    .card-section-enter { animation: section-enter 0.6s ease forwards; }
                    .card-section-leave { animation: section-leave 0.4s ease forwards; }
                "#}
            </style>
            <GradientBlobs />
            <Sparkles seed={seed} />
            <FloatingHearts seed={seed} />
            <div class={section_class}>
                { screen }
            </div>
        </main>
    }
}

fn greeting_screen(on_advance: &Callback<MouseEvent>) -> Html {
    html! {
        <>
            <img src={config::greeting_gif_url()} class="screen-gif" alt="peachcat hug" />
            <h1 class="cursive-title">{"Hello Dandounte!"}</h1>
            <p class="screen-text">{"I made something special just for you."}</p>
            <LoveButton onclick={on_advance.clone()}>{"Yalla ?"}</LoveButton>
        </>
    }
}

fn photo_screen(on_advance: &Callback<MouseEvent>) -> Html {
    html! {
        <>
            <div class="polaroid">
                <img src={config::photo_path()} alt="us" />
            </div>
            <p class="screen-text">
                {"Our new favorite photo of us! I love you so much ya habibi"}
            </p>
            <LoveButton onclick={on_advance.clone()}>{"Kamleee"}</LoveButton>
        </>
    }
}

fn letter_screen(on_advance: &Callback<MouseEvent>) -> Html {
    let reasons = [
        "Ur smile",
        "Ur kindness",
        "Ur smart",
        "Ur funny",
        "Ur soooo beautiful",
        "Ur caring",
        "Ur loyal",
        "Ur Personality",
        "Ur So creative",
        "Ur So talented",
        "Ur Hugs",
        "the love u show me",
        "Ur eyes",
        "Ur face",
        "Ur eyes",
        "ur hot ehem",
        "I can go on forever baby",
    ];

    html! {
        <>
            <div class="letter-note">
                <div class="letter-rule"></div>
                <p>
                    {"I just wanted to take a moment to tell you how much you mean to me. \
                      You are the light of my life, and every day with you is a blessing. \
                      Your kindness, your laughter, and your love make my world a better \
                      place. I am so grateful to have you by my side, and I look forward \
                      to all the adventures we will share together in the future ya ruh albe"}
                </p>
                <p class="letter-heading">{"Reasons Why I love you:"}</p>
                <ul>
                    { for reasons.iter().map(|reason| html! { <li>{ *reason }</li> }) }
                </ul>
            </div>
            <img src={config::letter_gif_url()} class="screen-gif" alt="love letter" />
            <LoveButton onclick={on_advance.clone()}>{"W ba3ed su2al"}</LoveButton>
        </>
    }
}

fn question_screen(
    shown: &CardState,
    on_accept: &Callback<MouseEvent>,
    on_decline: &Callback<MouseEvent>,
) -> Html {
    html! {
        <>
            <h2 class="cursive-title">{"Will you be my Valentine? "}</h2>
            <img src={config::question_gif_url()} class="screen-gif-large" alt="pleading cat" />
            <div class="answer-row">
                <div
                    class="answer-scale"
                    style={format!("transform: scale({:.2});", shown.accept_scale())}
                >
                    <LoveButton variant={ButtonVariant::Green} onclick={on_accept.clone()}>
                        {"YES 💖"}
                    </LoveButton>
                </div>
                <div
                    class="answer-scale"
                    style={format!("transform: scale({:.2});", shown.decline_scale())}
                >
                    <LoveButton variant={ButtonVariant::Gray} onclick={on_decline.clone()}>
                        { shown.decline_label() }
                    </LoveButton>
                </div>
            </div>
        </>
    }
}

fn celebration_screen() -> Html {
    html! {
        <>
            <img src={config::celebration_gif_url()} class="screen-gif-large" alt="bears celebrating" />
            <h2 class="celebration-title">{"YAYYYYY"}</h2>
            <p class="screen-text screen-text-wide">
                {"ba3ref we dont celebrate valentine's bas i promised eno ill try to make \
                  kel shi special for u no matter shu l munesabe i love you ya habibi my \
                  princess my love my bestfriend my whole world"}
            </p>
        </>
    }
}
