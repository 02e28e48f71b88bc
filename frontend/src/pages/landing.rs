use yew::prelude::*;

use crate::components::{
    animated_counter::AnimatedCounter,
    faq_accordion::FaqAccordion,
    feature_card::FeatureCard,
    feature_dialog::FeatureDialog,
    footer::Footer,
    image::FallbackImage,
    nav::Nav,
    reveal::Reveal,
    signup_form::SignupForm,
};
use crate::config;
use crate::content::{Feature, FAQ, FEATURES, STATS};
use crate::navigation::{use_section_refs, Section};
use crate::parallax::use_parallax_offset;
use crate::popup::{PopupAction, PopupState};

#[function_component(Landing)]
pub fn landing() -> Html {
    let refs = use_section_refs();
    let popup = use_reducer(PopupState::default);
    let parallax = use_parallax_offset(refs.get(Section::Hero).clone());

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let on_navigate = {
        let refs = refs.clone();
        Callback::from(move |section: Section| {
            refs.scroll_to(section);
        })
    };

    let on_select = {
        let popup = popup.clone();
        Callback::from(move |feature: &'static Feature| popup.dispatch(PopupAction::Select(feature)))
    };

    let on_close = {
        let popup = popup.clone();
        Callback::from(move |_: ()| popup.dispatch(PopupAction::Clear))
    };

    html! {
        <div class="landing-page">
            <Nav {on_navigate} />

            <main>
                <div
                    class="backdrop"
                    style={format!("background-image: url('{}');", config::HERO_BACKGROUND_IMAGE)}
                >
                    <div class="backdrop-overlay"></div>

                    <section
                        id={Section::Hero.id()}
                        ref={refs.get(Section::Hero).clone()}
                        class="hero"
                    >
                        <div
                            class="hero-glow"
                            style={format!("transform: translateY({:.2}%);", parallax)}
                        ></div>
                        <Reveal class="hero-content">
                            <h1>{"Unlock Your Potential with Our Innovative Platform"}</h1>
                            <p class="hero-subtitle">
                                {"Experience seamless collaboration, powerful tools, and unparalleled support to bring your ideas to life."}
                            </p>
                            <div class="hero-cta-group">
                                <button class="button button-primary" onclick={refs.navigate(Section::Contact)}>
                                    {"Get Started"}
                                </button>
                                <button class="button button-outline" onclick={refs.navigate(Section::Features)}>
                                    {"Learn More"}
                                </button>
                            </div>
                        </Reveal>
                    </section>

                    <section
                        id={Section::Features.id()}
                        ref={refs.get(Section::Features).clone()}
                        class="features"
                    >
                        <Reveal class="section-header">
                            <div class="badge">{"Key Features"}</div>
                            <h2>{"Designed to empower your workflow."}</h2>
                            <p>{"Our platform provides a suite of tools to streamline your operations and boost productivity."}</p>
                        </Reveal>
                        <div class="features-grid">
                            { for FEATURES.iter().enumerate().map(|(index, feature)| html! {
                                <FeatureCard
                                    key={feature.title}
                                    {feature}
                                    {index}
                                    on_select={on_select.clone()}
                                />
                            })}
                        </div>
                    </section>

                    <section
                        id={Section::Stats.id()}
                        ref={refs.get(Section::Stats).clone()}
                        class="stats"
                    >
                        <Reveal class="section-header">
                            <h2>{"Our Achievements"}</h2>
                            <p>{"Numbers speak louder than words. See our impact."}</p>
                        </Reveal>
                        <div class="stats-grid">
                            { for STATS.iter().enumerate().map(|(index, stat)| html! {
                                <Reveal
                                    key={stat.label}
                                    class="stat-card"
                                    amount={config::CARD_REVEAL_THRESHOLD}
                                    delay_ms={index as u32 * config::CARD_STAGGER_MS}
                                >
                                    <span class="stat-value">
                                        <AnimatedCounter target={stat.target} />
                                    </span>
                                    <p>{stat.label}</p>
                                </Reveal>
                            })}
                        </div>
                    </section>
                </div>

                <section
                    id={Section::Faq.id()}
                    ref={refs.get(Section::Faq).clone()}
                    class="faq"
                >
                    <Reveal class="section-header">
                        <div class="badge">{"FAQ"}</div>
                        <h2>{"Frequently Asked Questions"}</h2>
                        <p>{"Find answers to the most common questions about our platform."}</p>
                    </Reveal>
                    <div class="faq-list">
                        <FaqAccordion entries={&FAQ[..]} />
                    </div>
                </section>

                <section
                    id={Section::Contact.id()}
                    ref={refs.get(Section::Contact).clone()}
                    class="cta"
                >
                    <Reveal class="cta-image">
                        <FallbackImage
                            src={config::CTA_ILLUSTRATION_IMAGE}
                            alt="Tablet with landing page wireframe, glasses, pen, and AirPods"
                            width={600}
                            height={400}
                        />
                        <div class="cta-image-tint"></div>
                    </Reveal>
                    <Reveal class="cta-copy">
                        <h2>{"Ready to get started?"}</h2>
                        <p>{"Join thousands of satisfied users and transform your workflow today."}</p>
                        <SignupForm />
                    </Reveal>
                </section>

                <section
                    id={Section::About.id()}
                    ref={refs.get(Section::About).clone()}
                    class="about"
                >
                    <Reveal class="section-header">
                        <div class="badge badge-light">{"About Us"}</div>
                        <h2>{"Innovating for a better future."}</h2>
                        <p>
                            {"Acme Inc. is dedicated to creating cutting-edge solutions that empower individuals and businesses. With a focus on user-centric design and robust technology, we strive to deliver products that not only meet but exceed expectations. Our mission is to simplify complex tasks and foster a world where technology enhances human potential."}
                        </p>
                    </Reveal>
                </section>
            </main>

            <Footer />

            <FeatureDialog state={(*popup).clone()} {on_close} />

            <style>
                {r#"
                    :root {
                        --primary: #18181b;
                        --primary-foreground: #fafafa;
                        --secondary: #f4f4f5;
                        --muted: #f4f4f5;
                        --muted-foreground: #71717a;
                        --card: #ffffff;
                        --foreground: #09090b;
                        --radius: 8px;
                    }

                    .landing-page {
                        display: flex;
                        flex-direction: column;
                        min-height: 100dvh;
                        color: var(--foreground);
                        font-family: system-ui, -apple-system, sans-serif;
                    }

                    .sr-only {
                        position: absolute;
                        width: 1px;
                        height: 1px;
                        overflow: hidden;
                        clip: rect(0, 0, 0, 0);
                    }

                    .top-nav {
                        position: sticky;
                        top: 0;
                        z-index: 50;
                        background: var(--primary);
                        color: var(--primary-foreground);
                        transition: box-shadow 0.2s ease;
                    }

                    .top-nav.scrolled {
                        box-shadow: 0 2px 12px rgba(0, 0, 0, 0.25);
                    }

                    .nav-content {
                        display: flex;
                        align-items: center;
                        height: 3.5rem;
                        padding: 0 1.5rem;
                    }

                    .nav-logo-icon {
                        width: 1.5rem;
                        height: 1.5rem;
                        fill: none;
                        stroke: currentColor;
                        stroke-width: 2;
                    }

                    .nav-links {
                        margin-left: auto;
                        display: flex;
                        gap: 1.5rem;
                    }

                    .nav-link, .mobile-link {
                        color: inherit;
                        text-decoration: none;
                        font-size: 0.875rem;
                        font-weight: 500;
                        padding: 0.5rem 0.75rem;
                        border-radius: var(--radius);
                        transition: background 0.2s;
                    }

                    .nav-link:hover {
                        background: rgba(255, 255, 255, 0.1);
                    }

                    .burger-menu {
                        display: none;
                        margin-left: auto;
                        background: none;
                        border: none;
                        cursor: pointer;
                        flex-direction: column;
                        gap: 4px;
                    }

                    .burger-menu span {
                        width: 22px;
                        height: 2px;
                        background: var(--primary-foreground);
                    }

                    .mobile-menu {
                        display: none;
                    }

                    .mobile-menu.open {
                        display: block;
                        position: fixed;
                        inset: 0;
                        z-index: 60;
                    }

                    .mobile-menu-backdrop {
                        position: absolute;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.5);
                    }

                    .mobile-menu-panel {
                        position: absolute;
                        top: 0;
                        right: 0;
                        bottom: 0;
                        width: 75%;
                        max-width: 320px;
                        background: var(--card);
                        color: var(--foreground);
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        padding: 1.5rem;
                    }

                    .mobile-link {
                        font-size: 1.125rem;
                    }

                    @media (max-width: 768px) {
                        .nav-links {
                            display: none;
                        }

                        .burger-menu {
                            display: flex;
                        }
                    }

                    .backdrop {
                        position: relative;
                        background-size: cover;
                        background-position: center;
                        background-repeat: no-repeat;
                        background-attachment: fixed;
                    }

                    .backdrop-overlay {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, rgba(255, 255, 255, 0.7), rgba(255, 255, 255, 0));
                        pointer-events: none;
                    }

                    section {
                        position: relative;
                        padding: 6rem 1.5rem;
                    }

                    .hero {
                        overflow: hidden;
                        padding-top: 8rem;
                    }

                    .hero-glow {
                        position: absolute;
                        inset: -20% 0;
                        background: radial-gradient(circle at 30% 40%, rgba(24, 24, 27, 0.12), transparent 60%);
                        will-change: transform;
                        pointer-events: none;
                    }

                    .hero-content {
                        position: relative;
                        max-width: 650px;
                        margin: 0 auto 0 10%;
                    }

                    .hero h1 {
                        font-size: clamp(2rem, 5vw, 3.75rem);
                        font-weight: 800;
                        letter-spacing: -0.03em;
                        line-height: 1.1;
                    }

                    .hero-subtitle {
                        font-size: 1.25rem;
                        margin-top: 1rem;
                        opacity: 0.9;
                    }

                    .hero-cta-group {
                        display: flex;
                        gap: 1rem;
                        margin-top: 2rem;
                    }

                    .button {
                        border-radius: var(--radius);
                        padding: 0.625rem 1.25rem;
                        font-weight: 500;
                        cursor: pointer;
                        border: 1px solid transparent;
                        transition: opacity 0.2s, background 0.2s;
                    }

                    .button-primary {
                        background: var(--primary);
                        color: var(--primary-foreground);
                    }

                    .button-outline {
                        background: transparent;
                        color: var(--primary);
                        border-color: var(--primary);
                    }

                    .button-secondary {
                        background: var(--secondary);
                        color: var(--foreground);
                    }

                    .button:hover {
                        opacity: 0.9;
                    }

                    .button:disabled {
                        opacity: 0.6;
                        cursor: default;
                    }

                    .section-header {
                        text-align: center;
                        max-width: 900px;
                        margin: 0 auto 3rem;
                    }

                    .section-header h2 {
                        font-size: clamp(1.875rem, 4vw, 3rem);
                        font-weight: 700;
                        letter-spacing: -0.03em;
                    }

                    .section-header p {
                        color: var(--muted-foreground);
                        font-size: 1.125rem;
                        line-height: 1.6;
                    }

                    .badge {
                        display: inline-block;
                        border-radius: var(--radius);
                        background: rgba(24, 24, 27, 0.1);
                        padding: 0.25rem 0.75rem;
                        font-size: 0.875rem;
                        font-weight: 500;
                    }

                    .badge-light {
                        background: rgba(255, 255, 255, 0.1);
                        color: #fff;
                    }

                    .reveal {
                        opacity: 0;
                        transform: translateY(20px);
                        transition: opacity 0.5s ease-out, transform 0.5s ease-out;
                    }

                    .reveal.visible {
                        opacity: 1;
                        transform: none;
                    }

                    .features-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                        gap: 2rem;
                        max-width: 1024px;
                        margin: 0 auto;
                    }

                    .feature-card {
                        background: var(--card);
                        padding: 1.5rem;
                        border-radius: var(--radius);
                        border: 1px solid transparent;
                        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);
                        cursor: pointer;
                    }

                    .feature-card.visible:hover {
                        transform: scale(1.02);
                        border-color: var(--primary);
                        box-shadow: 0 8px 20px rgba(0, 0, 0, 0.12);
                    }

                    .feature-card-image {
                        border-radius: var(--radius);
                        object-fit: cover;
                        margin-bottom: 1rem;
                    }

                    .feature-card h3 {
                        font-size: 1.125rem;
                        font-weight: 700;
                    }

                    .feature-card p {
                        font-size: 0.875rem;
                        color: var(--muted-foreground);
                    }

                    .stats-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 2rem;
                        max-width: 960px;
                        margin: 0 auto;
                    }

                    .stat-card {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        padding: 1.5rem;
                        background: var(--card);
                        border-radius: var(--radius);
                        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);
                    }

                    .stat-value {
                        font-size: 3rem;
                        font-weight: 700;
                        font-variant-numeric: tabular-nums;
                    }

                    .stat-card p {
                        color: var(--muted-foreground);
                        font-size: 1.125rem;
                        margin-top: 0.5rem;
                    }

                    .faq {
                        background: var(--muted);
                    }

                    .faq-list {
                        max-width: 768px;
                        margin: 0 auto;
                    }

                    .accordion-item {
                        border-bottom: 1px solid #e4e4e7;
                    }

                    .accordion-trigger {
                        width: 100%;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 1rem 0;
                        background: none;
                        border: none;
                        font-size: 1.125rem;
                        font-weight: 500;
                        text-align: left;
                        cursor: pointer;
                    }

                    .accordion-content p {
                        color: var(--muted-foreground);
                        padding-bottom: 1rem;
                        margin: 0;
                    }

                    .cta {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                        gap: 3rem;
                        align-items: center;
                        background: var(--primary);
                        color: var(--primary-foreground);
                    }

                    .cta-image {
                        position: relative;
                        border-radius: 12px;
                        overflow: hidden;
                        aspect-ratio: 3 / 2;
                        box-shadow: 0 10px 30px rgba(0, 0, 0, 0.3);
                    }

                    .cta-image img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }

                    .cta-image-tint {
                        position: absolute;
                        inset: 0;
                        background: rgba(24, 24, 27, 0.2);
                    }

                    .cta-copy h2 {
                        font-size: clamp(1.875rem, 3vw, 2.25rem);
                        font-weight: 700;
                    }

                    .cta-copy p {
                        opacity: 0.8;
                    }

                    .signup {
                        max-width: 24rem;
                    }

                    .signup-form {
                        display: flex;
                        gap: 0.5rem;
                    }

                    .signup-form input {
                        flex: 1;
                        padding: 0.5rem 0.75rem;
                        border-radius: var(--radius);
                        border: 1px solid #e4e4e7;
                    }

                    .signup-message.success {
                        color: #86efac;
                    }

                    .signup-message.error {
                        color: #fca5a5;
                    }

                    .signup-note {
                        font-size: 0.75rem;
                        opacity: 0.7;
                    }

                    .signup-note a {
                        color: inherit;
                        text-underline-offset: 2px;
                    }

                    .about {
                        background: #000;
                        color: #fff;
                    }

                    .about .section-header p {
                        color: #d1d5db;
                    }

                    .site-footer {
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 1.5rem;
                        border-top: 1px solid #e4e4e7;
                        font-size: 0.75rem;
                        color: var(--muted-foreground);
                    }

                    .footer-links {
                        margin-left: auto;
                        display: flex;
                        gap: 1.5rem;
                    }

                    .footer-links a {
                        color: inherit;
                        text-decoration: none;
                    }

                    .footer-links a:hover {
                        text-decoration: underline;
                    }

                    .dialog-overlay {
                        position: fixed;
                        inset: 0;
                        z-index: 100;
                        background: rgba(0, 0, 0, 0.8);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                    }

                    .dialog-content {
                        position: relative;
                        width: 100%;
                        max-width: 600px;
                        max-height: 90vh;
                        overflow-y: auto;
                        background: var(--card);
                        border-radius: var(--radius);
                        padding: 1.5rem;
                        box-shadow: 0 20px 50px rgba(0, 0, 0, 0.3);
                    }

                    .dialog-close {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        background: none;
                        border: none;
                        font-size: 1.5rem;
                        cursor: pointer;
                        opacity: 0.7;
                    }

                    .dialog-header h2 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        margin: 0 0 0.5rem;
                    }

                    .dialog-description {
                        color: var(--muted-foreground);
                    }

                    .dialog-body {
                        display: grid;
                        gap: 1rem;
                        padding: 1rem 0;
                    }

                    .dialog-image {
                        display: flex;
                        justify-content: center;
                    }

                    .dialog-image img {
                        border-radius: var(--radius);
                        object-fit: cover;
                    }

                    .dialog-long-description {
                        line-height: 1.7;
                    }
                "#}
            </style>
        </div>
    }
}
