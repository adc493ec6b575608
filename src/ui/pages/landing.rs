//! Landing page component
//!
//! Single-page lead capture site for the DIFAL calculator:
//! - SEO meta tags
//! - Hero section with the primary lead form and offer countdown
//! - Benefits section with feature cards
//! - Calculation demo with rotating status text
//! - Pricing section with its own lead form
//! - Final call-to-action form and footer
//! - Exit-intent popup with a last-chance form
//!
//! Every form is an independent [`LeadForm`] keyed by its [`FormSection`].

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::FormSection;
use crate::ui::countdown::OfferCountdown;
use crate::ui::exit_popup::ExitIntentPopup;
use crate::ui::icon::{Icon, icons};
use crate::ui::lead_form::LeadForm;
use crate::ui::rotating_text::RotatingText;
use crate::ui::scroll_reveal::ScrollReveal;

/// Landing page component with scroll-based animations
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SeoMeta />

        <div class="min-h-screen bg-white text-gray-900 overflow-x-hidden">
            <Header />

            // Hero Section
            <section id="top" class="min-h-screen flex items-center justify-center relative pt-16">
                <div class="text-center px-4 max-w-4xl mx-auto">
                    <span class="inline-block mb-6 px-4 py-1 rounded-full bg-emerald-50 text-emerald-700 text-sm font-medium landing-fade-in-up">
                        "Early access is free for the first users"
                    </span>
                    <h1 class="text-4xl sm:text-5xl lg:text-6xl font-bold mb-6 tracking-tight landing-fade-in-up">
                        "Calculate DIFAL in seconds, not hours"
                    </h1>
                    <p class="text-xl text-gray-600 max-w-2xl mx-auto mb-10 leading-relaxed landing-fade-in-up landing-delay-200">
                        "Automatic interstate ICMS rate differential for every state, always following the current legislation."
                    </p>

                    <div class="max-w-xl mx-auto landing-fade-in-up landing-delay-400">
                        <LeadForm section=FormSection::Hero cta_label="Get free access" />
                        <div class="mt-6 flex justify-center">
                            <OfferCountdown />
                        </div>
                    </div>
                </div>
            </section>

            // Benefits Section
            <section id="benefits" class="py-20 px-4 bg-gray-50">
                <div class="max-w-6xl mx-auto">
                    <div class="text-center mb-16 landing-scroll-animate">
                        <h2 class="text-3xl sm:text-4xl font-bold mb-4">"Why use the calculator?"</h2>
                        <p class="text-lg text-gray-600 max-w-2xl mx-auto">
                            "Stop maintaining spreadsheets for every state rule change."
                        </p>
                    </div>

                    <div class="grid md:grid-cols-3 gap-8">
                        <FeatureCard
                            icon=icons::LIGHTNING
                            title="Instant results"
                            description="Enter the operation once and get the DIFAL amount with the full breakdown."
                        />
                        <FeatureCard
                            icon=icons::SHIELD
                            title="Always up to date"
                            description="State rates and agreements are reviewed as soon as the legislation changes."
                        />
                        <FeatureCard
                            icon=icons::DOCUMENT
                            title="Audit-ready reports"
                            description="Export every calculation with the rules that were applied to it."
                        />
                    </div>
                </div>
            </section>

            // Calculation demo
            <section id="demo" class="py-20 px-4">
                <div class="max-w-3xl mx-auto text-center landing-scroll-animate">
                    <h2 class="text-3xl sm:text-4xl font-bold mb-8">"See it working"</h2>
                    <div class="calc-demo">
                        <Icon path=icons::CALCULATOR class="w-10 h-10 mx-auto mb-4 text-emerald-500" />
                        <RotatingText />
                    </div>
                </div>
            </section>

            <PricingSection />

            // Final call to action
            <section id="final-cta" class="py-20 px-4 bg-gray-900 text-white">
                <div class="max-w-2xl mx-auto text-center landing-scroll-animate">
                    <h2 class="text-3xl sm:text-4xl font-bold mb-4">"Ready to stop guessing?"</h2>
                    <p class="text-lg text-gray-300 mb-8">
                        "Join the waitlist and be the first to calculate DIFAL automatically."
                    </p>
                    <LeadForm section=FormSection::FinalCta cta_label="Join the waitlist" />
                </div>
            </section>

            <Footer />
        </div>

        <ExitIntentPopup />
        <LandingStyles />
        <ScrollReveal />
    }
}

/// Header with in-page navigation
#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="fixed top-0 inset-x-0 z-50 bg-white/90 backdrop-blur border-b border-gray-100">
            <nav class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between">
                <a href="#top" class="flex items-center gap-3">
                    <Logo />
                    <span class="text-xl font-bold">"DIFAL Calc"</span>
                </a>
                <div class="hidden md:flex items-center gap-8 text-sm text-gray-600">
                    <a href="#benefits" class="hover:text-emerald-600 transition-colors">"Benefits"</a>
                    <a href="#demo" class="hover:text-emerald-600 transition-colors">"Demo"</a>
                    <a href="#pricing" class="hover:text-emerald-600 transition-colors">"Pricing"</a>
                </div>
                <a href="#final-cta" class="landing-btn-primary">"Get access"</a>
            </nav>
        </header>
    }
}

/// Feature card component
#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="landing-scroll-animate bg-white p-6 rounded-xl border border-gray-200 hover:border-emerald-300
                    transition-all duration-300 hover:shadow-lg hover:-translate-y-1">
            <div class="w-12 h-12 rounded-lg bg-emerald-50 text-emerald-600 flex items-center justify-center mb-4">
                <Icon path=icon class="w-6 h-6" />
            </div>
            <h3 class="text-lg font-semibold mb-2">{title}</h3>
            <p class="text-gray-600 text-sm leading-relaxed">{description}</p>
        </div>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="DIFAL Calc - Automatic DIFAL calculation" />

        <Meta name="description" content="Calculate the interstate ICMS rate differential (DIFAL) automatically for every state. Get free early access." />
        <Meta name="keywords" content="DIFAL, ICMS, tax calculator, interstate tax, DIFAL calculation" />

        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="DIFAL Calc - Automatic DIFAL calculation" />
        <Meta property="og:description" content="Calculate DIFAL in seconds, always following the current legislation." />

        <Meta property="twitter:card" content="summary_large_image" />
        <Meta property="twitter:title" content="DIFAL Calc - Automatic DIFAL calculation" />

        <Link rel="canonical" href="/" />
    }
}

/// Pricing section component
#[component]
fn PricingSection() -> impl IntoView {
    view! {
        <section id="pricing" class="py-20 px-4 bg-gray-50">
            <div class="max-w-5xl mx-auto">
                <div class="text-center mb-16 landing-scroll-animate">
                    <h2 class="text-3xl sm:text-4xl font-bold mb-4">"Simple pricing"</h2>
                    <p class="text-lg text-gray-600 max-w-2xl mx-auto">
                        "Early users keep the launch price for life."
                    </p>
                </div>

                <div class="grid md:grid-cols-2 gap-8 max-w-4xl mx-auto">
                    <PricingCard
                        name="Monthly"
                        price="R$ 49"
                        period="/month"
                        features=vec![
                            "Unlimited calculations",
                            "All 27 states",
                            "PDF and spreadsheet export",
                        ]
                        highlighted=false
                    />
                    <PricingCard
                        name="Early access"
                        price="R$ 0"
                        period="during beta"
                        features=vec![
                            "Everything in Monthly",
                            "Launch price locked in",
                            "Direct line to the product team",
                        ]
                        highlighted=true
                    />
                </div>

                <div class="max-w-xl mx-auto mt-12 landing-scroll-animate">
                    <LeadForm section=FormSection::Pricing cta_label="Reserve my spot" />
                </div>
            </div>
        </section>
    }
}

/// Pricing card component
#[component]
fn PricingCard(
    name: &'static str,
    price: &'static str,
    period: &'static str,
    features: Vec<&'static str>,
    highlighted: bool,
) -> impl IntoView {
    let card_class = if highlighted {
        "landing-scroll-animate relative bg-white p-8 rounded-2xl border-2 border-emerald-500 shadow-xl"
    } else {
        "landing-scroll-animate bg-white p-8 rounded-2xl border border-gray-200"
    };

    view! {
        <div class=card_class>
            {highlighted.then(|| view! {
                <div class="absolute -top-4 left-1/2 -translate-x-1/2 px-4 py-1 bg-emerald-500 text-white text-sm font-medium rounded-full">
                    "Limited offer"
                </div>
            })}

            <div class="text-center mb-6">
                <h3 class="text-xl font-bold mb-2">{name}</h3>
                <div class="flex items-baseline justify-center gap-1">
                    <span class="text-4xl font-bold">{price}</span>
                    <span class="text-gray-600">{period}</span>
                </div>
            </div>

            <ul class="space-y-3">
                {features.into_iter().map(|feature| {
                    view! {
                        <li class="flex items-center gap-3">
                            <Icon path=icons::CHECK class="w-5 h-5 text-emerald-500 flex-shrink-0" />
                            <span>{feature}</span>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </div>
    }
}

/// Logo component
#[component]
fn Logo() -> impl IntoView {
    view! {
        <div class="w-10 h-10 bg-gradient-to-br from-emerald-500 to-teal-400 rounded-xl
                    flex items-center justify-center shadow-lg text-white">
            <Icon path=icons::CALCULATOR class="w-6 h-6" />
        </div>
    }
}

/// Footer component
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-12 border-t border-gray-100">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 flex flex-col sm:flex-row items-center justify-between gap-4">
                <div class="flex items-center gap-3">
                    <Logo />
                    <span class="font-bold">"DIFAL Calc"</span>
                </div>
                <span class="text-sm text-gray-500">"© 2025 DIFAL Calc. All rights reserved."</span>
            </div>
        </footer>
    }
}

/// CSS for forms, toasts and page animations
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            html { scroll-behavior: smooth; }

            .landing-btn-primary {
                padding: 0.5rem 1.25rem;
                font-weight: 600;
                color: white;
                background-color: #10b981;
                border-radius: 0.75rem;
                transition: all 0.3s;
            }
            .landing-btn-primary:hover { background-color: #059669; }

            /* Lead forms */
            .lead-form {
                display: flex;
                flex-wrap: wrap;
                gap: 0.75rem;
            }
            .lead-input {
                flex: 1 1 16rem;
                padding: 0.875rem 1rem;
                border: 1px solid #d1d5db;
                border-radius: 0.75rem;
                color: #111827;
                background: white;
            }
            .lead-submit {
                padding: 0.875rem 1.5rem;
                font-weight: 600;
                color: white;
                background: linear-gradient(135deg, #2563eb, #1d4ed8);
                border-radius: 0.75rem;
                transition: all 0.3s;
                cursor: pointer;
            }
            .lead-submit:disabled { cursor: default; }
            .lead-submit.tone-busy { opacity: 0.8; }
            .lead-submit.tone-success { background: linear-gradient(135deg, #10b981, #06d6a0); }
            .lead-submit.tone-error { background: linear-gradient(135deg, #ef4444, #dc2626); }

            /* Toasts */
            .lead-toast {
                display: flex;
                align-items: flex-start;
                gap: 0.75rem;
                padding: 1rem 1.25rem;
                color: white;
                font-weight: 500;
                border-radius: 0.75rem;
                box-shadow: 0 10px 25px rgba(0, 0, 0, 0.15);
                transition: transform 0.3s ease;
            }
            .lead-toast-success { background: linear-gradient(135deg, #10b981, #06d6a0); }
            .lead-toast-error { background: linear-gradient(135deg, #ef4444, #dc2626); }

            /* Countdown and demo */
            .offer-countdown {
                display: inline-flex;
                align-items: center;
                gap: 0.5rem;
                padding: 0.5rem 1rem;
                border-radius: 9999px;
                background: #fef3c7;
                color: #92400e;
            }
            .calc-demo {
                padding: 2.5rem;
                border-radius: 1rem;
                border: 1px solid #e5e7eb;
                box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
            }
            .rotating-text { font-size: 1.25rem; font-weight: 600; }

            /* Exit popup */
            .exit-overlay {
                position: fixed;
                inset: 0;
                z-index: 900;
                display: flex;
                align-items: center;
                justify-content: center;
                background: rgba(17, 24, 39, 0.6);
            }
            .exit-popup {
                position: relative;
                max-width: 32rem;
                margin: 1rem;
                padding: 2rem;
                border-radius: 1rem;
                background: white;
                color: #111827;
            }
            .exit-close {
                position: absolute;
                top: 1rem;
                right: 1rem;
                color: #6b7280;
            }

            @keyframes landing-fade-in-up {
                from { opacity: 0; transform: translateY(20px); }
                to { opacity: 1; transform: translateY(0); }
            }
            .landing-fade-in-up { animation: landing-fade-in-up 0.6s ease-out forwards; }
            .landing-delay-200 { animation-delay: 0.2s; opacity: 0; }
            .landing-delay-400 { animation-delay: 0.4s; opacity: 0; }

            /* Scroll animations */
            .landing-scroll-animate {
                opacity: 0;
                transform: translateY(20px);
                transition: opacity 0.8s ease, transform 0.8s ease;
            }
            .landing-scroll-animate.visible {
                opacity: 1;
                transform: translateY(0);
            }
            "#
        </style>
    }
}
