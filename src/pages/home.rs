use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::header::{use_smooth_anchors, Header};
use crate::components::konami::use_konami_code;
use crate::components::reveal::{load_deferred_images, use_reveal_on_scroll};
use crate::components::support::SupportButtons;
use crate::config::{self, RelayConfig};

struct Service {
    icon: &'static str,
    title: &'static str,
    blurb: &'static str,
}

const SERVICES: &[Service] = &[
    Service {
        icon: "💻",
        title: "Buying advice",
        blurb: "Honest recommendations for laptops, phones and home tech that fit your budget, not a sales target.",
    },
    Service {
        icon: "🛠️",
        title: "Setup & troubleshooting",
        blurb: "Step-by-step help getting new devices running or fixing the ones that stopped cooperating.",
    },
    Service {
        icon: "🔒",
        title: "Privacy & security",
        blurb: "Password managers, backups, two-factor login and sensible defaults for the whole household.",
    },
    Service {
        icon: "🏠",
        title: "Home networking",
        blurb: "Wi-Fi dead zones, mesh systems and router settings explained in plain language.",
    },
];

#[function_component(Home)]
pub fn home() -> Html {
    let relay_config = use_memo(|_| RelayConfig::from_build_env(), ());

    use_smooth_anchors();
    use_reveal_on_scroll();
    use_konami_code();

    use_effect_with_deps(
        |_| {
            load_deferred_images();
            || ()
        },
        (),
    );

    html! {
        <div class="site">
            <Header />
            <main>
                <section id="home" class="hero">
                    <div class="container hero-content">
                        <h1>{"Tech questions? Get straight answers."}</h1>
                        <p>{"Personal, independent tech advice without the jargon or the upsell."}</p>
                        <div class="hero-actions">
                            <a href="#contact" class="btn btn-primary">{"Ask a question"}</a>
                            <a href="#services" class="btn btn-secondary">{"What I help with"}</a>
                        </div>
                    </div>
                </section>

                <section id="services" class="services">
                    <div class="container">
                        <h2>{"How I can help"}</h2>
                        <div class="services-grid">
                            { for SERVICES.iter().map(|s| html! {
                                <div class="service-card">
                                    <div class="service-icon">{s.icon}</div>
                                    <h3>{s.title}</h3>
                                    <p>{s.blurb}</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </section>

                <section id="about" class="about">
                    <div class="container about-content">
                        <h2>{"About"}</h2>
                        <p>{"I've spent years fixing friends' and family's tech. This site makes that help available to anyone: describe your situation and you'll get a personal answer, usually within a day."}</p>
                    </div>
                </section>

                <section id="support" class="support">
                    <div class="container">
                        <h2>{"Support this service"}</h2>
                        <p>{"The advice is free. If it saved you time or money, a small tip keeps it that way."}</p>
                        <SupportButtons />
                    </div>
                </section>

                <section id="contact" class="contact">
                    <div class="container">
                        <h2>{"Get in touch"}</h2>
                        <ContactForm config={(*relay_config).clone()} />
                    </div>
                </section>
            </main>
            <footer class="footer">
                <div class="container">
                    {format!("© {}", config::SITE_NAME)}
                </div>
            </footer>
        </div>
    }
}

pub const PAGE_CSS: &str = r#"
:root {
    --primary: #2563eb;
    --primary-dark: #1d4ed8;
    --text: #1f2937;
    --text-light: #6b7280;
    --error: #dc2626;
    --success: #16a34a;
    --bg-alt: #f3f4f6;
}
* { box-sizing: border-box; }
body { margin: 0; font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; color: var(--text); }
.container { max-width: 1100px; margin: 0 auto; padding: 0 1.5rem; }
.header {
    position: fixed;
    top: 0;
    left: 0;
    width: 100%;
    z-index: 100;
    background: transparent;
    transition: transform 0.3s ease, background 0.3s ease, box-shadow 0.3s ease;
}
.header.scrolled {
    background: rgba(255, 255, 255, 0.95);
    backdrop-filter: blur(10px);
    box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08);
}
.nav { display: flex; align-items: center; justify-content: space-between; height: 70px; }
.nav-logo { font-weight: 700; font-size: 1.25rem; color: var(--primary); text-decoration: none; }
.nav-menu { display: flex; gap: 1.5rem; list-style: none; margin: 0; padding: 0; }
.nav-link { color: var(--text); text-decoration: none; }
.nav-toggle { display: none; background: none; border: none; cursor: pointer; }
.nav-toggle .bar { display: block; width: 24px; height: 2px; margin: 5px 0; background: var(--text); transition: 0.3s; }
@media (max-width: 768px) {
    .nav-toggle { display: block; }
    .nav-menu {
        position: fixed;
        top: 70px;
        left: -100%;
        width: 100%;
        flex-direction: column;
        background: #fff;
        padding: 1.5rem;
        transition: left 0.3s ease;
    }
    .nav-menu.active { left: 0; }
    .nav-toggle.active .bar:nth-child(2) { opacity: 0; }
    .nav-toggle.active .bar:nth-child(1) { transform: translateY(7px) rotate(45deg); }
    .nav-toggle.active .bar:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }
    .form-row { flex-direction: column; }
}
section { padding: 5rem 0; }
.hero { padding-top: 9rem; text-align: center; }
.hero h1 { font-size: 2.75rem; margin-bottom: 1rem; }
.hero-actions { display: flex; gap: 1rem; justify-content: center; margin-top: 2rem; }
.btn { display: inline-block; padding: 0.75rem 1.5rem; border-radius: 8px; border: none; font-size: 1rem; cursor: pointer; text-decoration: none; }
.btn-primary { background: var(--primary); color: #fff; }
.btn-primary:hover { background: var(--primary-dark); }
.btn-secondary { background: var(--bg-alt); color: var(--text); }
.btn.loading { opacity: 0.7; cursor: wait; }
.btn:disabled { cursor: not-allowed; }
.services { background: var(--bg-alt); }
.services-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(230px, 1fr)); gap: 1.5rem; }
.service-card, .about-content, .contact-form { opacity: 0; transform: translateY(30px); transition: opacity 0.6s ease, transform 0.6s ease; }
.service-card { background: #fff; border-radius: 12px; padding: 1.5rem; box-shadow: 0 4px 16px rgba(0, 0, 0, 0.05); }
.service-icon { font-size: 2rem; }
.fade-in { opacity: 1; transform: translateY(0); }
.support-buttons { display: flex; gap: 1rem; flex-wrap: wrap; }
.contact-form { max-width: 720px; }
.form-row { display: flex; gap: 1rem; }
.form-row .form-group { flex: 1; }
.form-group { display: flex; flex-direction: column; margin-bottom: 1.25rem; transition: transform 0.2s ease; }
.form-group label { font-weight: 600; margin-bottom: 0.4rem; }
.form-group input, .form-group select, .form-group textarea {
    padding: 0.75rem;
    border: 1px solid #d1d5db;
    border-radius: 8px;
    font: inherit;
}
.form-group textarea { min-height: 120px; resize: vertical; }
.form-group.focused label { color: var(--primary); }
.form-group.focused input, .form-group.focused select, .form-group.focused textarea { border-color: var(--primary); }
.form-status { margin-top: 1.25rem; padding: 1rem; border-radius: 8px; }
.form-status.success { background: #dcfce7; color: var(--success); }
.form-status.error { background: #fee2e2; color: var(--error); }
.footer { padding: 2rem 0; text-align: center; color: var(--text-light); }
.not-found { padding-top: 9rem; text-align: center; }
@keyframes rainbow {
    0% { filter: hue-rotate(0deg); }
    100% { filter: hue-rotate(360deg); }
}
"#;
