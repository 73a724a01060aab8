use yew::prelude::*;

#[function_component(FluidBackground)]
pub fn fluid_background() -> Html {
    html! {
        <div class="fluid-background" aria-hidden="true">
            <div class="blob blob-amber"></div>
            <div class="blob blob-pink"></div>
            <div class="blob blob-cyan"></div>
            <style>
                {r#"
                .fluid-background {
                    position: fixed;
                    inset: 0;
                    z-index: -1;
                    overflow: hidden;
                    background: #0b0b0f;
                    pointer-events: none;
                }

                .blob {
                    position: absolute;
                    width: 60vmax;
                    height: 60vmax;
                    border-radius: 50%;
                    filter: blur(80px);
                    opacity: 0.35;
                    will-change: transform;
                    animation: drift 24s ease-in-out infinite alternate;
                }

                .blob-amber {
                    top: -20vmax;
                    left: -10vmax;
                    background: #f59e0b;
                }

                .blob-pink {
                    bottom: -25vmax;
                    right: -15vmax;
                    background: #ec4899;
                    animation-duration: 30s;
                    animation-delay: -6s;
                }

                .blob-cyan {
                    top: 30%;
                    left: 40%;
                    width: 40vmax;
                    height: 40vmax;
                    background: #22d3ee;
                    opacity: 0.18;
                    animation-duration: 36s;
                    animation-delay: -12s;
                }

                @keyframes drift {
                    0% { transform: translate(0, 0) scale(1); }
                    50% { transform: translate(8vmax, 6vmax) scale(1.15); }
                    100% { transform: translate(-6vmax, 10vmax) scale(0.95); }
                }
                "#}
            </style>
        </div>
    }
}
