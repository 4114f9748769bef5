use yew::prelude::*;

use crate::components::cta::{FinalCta, PricingButton};
use crate::components::faq::{FaqEntry, FaqList};
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::particles::Particles;
use crate::components::reveal::use_scroll_reveal;
use crate::components::scroll_to_top::ScrollToTop;
use crate::components::section_link::SectionLink;

const DASHBOARD_IMAGE: &str =
    "https://user-gen-media-assets.s3.amazonaws.com/gpt4o_images/a2390567-d04c-4210-9c81-f693f14c5364.png";
const FALLBACK_IMAGE: &str = "https://via.placeholder.com/600x400.png?text=Image+Unavailable";

const SOCIAL_LOGOS: [&str; 5] = ["TechFlow Inc", "GrowthLab", "Innovate Co", "ScalePro", "FutureSync"];

struct Feature {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: "🤖",
        title: "AI Chat Automation",
        body: "Handle unlimited conversations across WhatsApp, phone, and web chat with intelligent AI agents.",
    },
    Feature {
        icon: "⚡",
        title: "24/7 Lead Qualification",
        body: "Qualify prospects instantly while your team sleeps. Never lose another lead to slow response times.",
    },
    Feature {
        icon: "🔄",
        title: "Smart CRM Sync",
        body: "Automatically sync qualified leads to your CRM with complete conversation history and sentiment analysis.",
    },
];

const STEPS: [Feature; 3] = [
    Feature {
        icon: "⚡",
        title: "Connect Channels",
        body: "Link WhatsApp Business and phone systems in minutes",
    },
    Feature {
        icon: "🧠",
        title: "Train Your AI",
        body: "Describe your business and ideal customers",
    },
    Feature {
        icon: "💰",
        title: "Generate Revenue",
        body: "Watch qualified leads flow into your CRM automatically",
    },
];

const STATS: [(&str, &str); 3] = [
    ("500K+", "Leads Processed"),
    ("400%", "Avg Increase"),
    ("< 30s", "Response Time"),
];

struct Testimonial {
    quote: &'static str,
    initials: &'static str,
    name: &'static str,
    role: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "\"Convex increased our lead response rate by 400% and freed up 20 hours per week for our sales team.\"",
        initials: "SC",
        name: "Sarah Chen",
        role: "VP Sales, TechFlow Inc",
    },
    Testimonial {
        quote: "\"The AI understands our business perfectly. It's like having a sales rep that never sleeps.\"",
        initials: "MR",
        name: "Michael Rodriguez",
        role: "Founder, GrowthLab",
    },
    Testimonial {
        quote: "\"ROI was positive within the first month. Best investment we've made in sales automation.\"",
        initials: "ET",
        name: "Emma Thompson",
        role: "Marketing Director, Innovate Co",
    },
];

struct Plan {
    name: &'static str,
    price: &'static str,
    blurb: &'static str,
    features: &'static [&'static str],
    button: &'static str,
    featured: bool,
}

const PLANS: [Plan; 3] = [
    Plan {
        name: "Starter",
        price: "$49",
        blurb: "Perfect for small teams",
        features: &[
            "Up to 500 conversations/month",
            "Basic AI responses",
            "Email support",
            "1 team member",
        ],
        button: "Start Free Trial",
        featured: false,
    },
    Plan {
        name: "Growth",
        price: "$149",
        blurb: "Best for growing businesses",
        features: &[
            "Up to 5,000 conversations/month",
            "Advanced AI with custom training",
            "CRM integrations",
            "Priority support",
            "Up to 5 team members",
        ],
        button: "Start Free Trial",
        featured: true,
    },
    Plan {
        name: "Enterprise",
        price: "Custom",
        blurb: "For large organizations",
        features: &[
            "Unlimited conversations",
            "Dedicated AI model",
            "Custom integrations",
            "Dedicated success manager",
            "Unlimited team members",
        ],
        button: "Contact Sales",
        featured: false,
    },
];

fn faq_entries() -> Vec<FaqEntry> {
    vec![
        FaqEntry::new(
            "faq-getting-started",
            "How quickly can I get started?",
            "You can be up and running in under 10 minutes. Our guided setup wizard connects your channels and trains your AI with just a few clicks.",
        ),
        FaqEntry::new(
            "faq-business-context",
            "Does the AI understand my specific business?",
            "Yes! During setup, you provide details about your business, products, and ideal customers. Our AI learns your unique context and improves over time.",
        ),
        FaqEntry::new(
            "faq-channels",
            "What channels does Convex support?",
            "We support WhatsApp Business, phone calls, web chat, and SMS. More channels are added regularly based on customer demand.",
        ),
        FaqEntry::new(
            "faq-trial",
            "Is there a free trial?",
            "Yes! Try Convex free for 14 days with no credit card required. Experience the full platform and see results before you commit.",
        ),
        FaqEntry::new(
            "faq-security",
            "How secure is my customer data?",
            "We use bank-level encryption (AES-256) and are SOC 2 compliant. Your data is stored in secure AWS data centers with regular security audits.",
        ),
        FaqEntry::new(
            "faq-cancel",
            "Can I cancel anytime?",
            "Absolutely. Cancel your subscription anytime directly from your dashboard. No questions asked, no hidden fees.",
        ),
    ]
}

fn footer_links(title: &'static str, links: &[&'static str]) -> Html {
    html! {
        <div class="footer-section">
            <h4>{ title }</h4>
            <ul>
                { for links.iter().map(|label| html! {
                    <li><SectionLink href="#">{ *label }</SectionLink></li>
                }) }
            </ul>
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    use_scroll_reveal();

    // swap in the placeholder when the remote screenshot fails to load
    let on_dashboard_error = Callback::from(|e: Event| {
        let img: web_sys::HtmlImageElement = e.target_unchecked_into();
        if img.src() != FALLBACK_IMAGE {
            img.set_src(FALLBACK_IMAGE);
        }
    });

    html! {
        <div class="landing-page">
            <Particles />
            <Navbar />

            <Hero />

            <section class="social-proof">
                <div class="container">
                    <p class="social-proof-text">{"Trusted by 1000+ companies"}</p>
                    <div class="social-logos">
                        { for SOCIAL_LOGOS.iter().map(|name| html! {
                            <div class="social-logo" key={*name}>{ *name }</div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="features" id="features">
                <div class="container">
                    <div class="features-header">
                        <h2 class="section-title">{"AI Chat Automation That Actually Works"}</h2>
                        <p class="section-subtitle">
                            {"Handle unlimited conversations while your team focuses on closing deals"}
                        </p>
                    </div>
                    <div class="features-grid">
                        <div class="features-content">
                            { for FEATURES.iter().map(|feature| html! {
                                <div class="feature-card">
                                    <div class="feature-icon">{ feature.icon }</div>
                                    <div class="feature-content">
                                        <h3>{ feature.title }</h3>
                                        <p>{ feature.body }</p>
                                    </div>
                                </div>
                            }) }
                        </div>
                        <div class="features-image">
                            <div class="dashboard-frame">
                                <img
                                    src={DASHBOARD_IMAGE}
                                    alt="AI dashboard preview"
                                    width="600"
                                    height="400"
                                    loading="lazy"
                                    class="feature-img"
                                    onerror={on_dashboard_error}
                                />
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            <section class="how-it-works">
                <div class="container">
                    <h2 class="section-title">{"How It Works"}</h2>
                    <div class="steps-grid">
                        { for STEPS.iter().enumerate().map(|(i, step)| html! {
                            <>
                                { if i > 0 { html! { <div class="step-connector"></div> } } else { html! {} } }
                                <div class="step-card">
                                    <div class="step-number">{ (i + 1).to_string() }</div>
                                    <div class="step-icon">{ step.icon }</div>
                                    <h3>{ step.title }</h3>
                                    <p>{ step.body }</p>
                                </div>
                            </>
                        }) }
                    </div>
                </div>
            </section>

            <section class="dashboard-preview">
                <div class="container">
                    <h2 class="section-title">{"See Convex in Action"}</h2>
                    <p class="section-subtitle">{"Real-time insights and conversation analytics"}</p>
                    <div class="dashboard-showcase">
                        <div class="stats-row">
                            { for STATS.iter().map(|(number, label)| html! {
                                <div class="stat-card">
                                    <div class="stat-number">{ *number }</div>
                                    <div class="stat-label">{ *label }</div>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </section>

            <section class="testimonials">
                <div class="container">
                    <h2 class="section-title">{"What Our Customers Say"}</h2>
                    <div class="testimonial-grid">
                        { for TESTIMONIALS.iter().enumerate().map(|(i, t)| html! {
                            <div class="testimonial-card floating" style={format!("animation-delay: {:.1}s;", i as f64 * 0.5)}>
                                <div class="testimonial-content">
                                    <p class="testimonial-quote">{ t.quote }</p>
                                    <div class="testimonial-author">
                                        <div class="author-avatar">{ t.initials }</div>
                                        <div class="author-info">
                                            <h4>{ t.name }</h4>
                                            <p>{ t.role }</p>
                                        </div>
                                    </div>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="pricing" id="pricing">
                <div class="container">
                    <h2 class="section-title">{"Simple, Transparent Pricing"}</h2>
                    <p class="section-subtitle">{"Choose the perfect plan for your business"}</p>
                    <div class="pricing-grid">
                        { for PLANS.iter().map(|plan| html! {
                            <div class={classes!("pricing-card", plan.featured.then_some("featured"))}>
                                { if plan.featured { html! { <div class="popular-badge">{"Most Popular"}</div> } } else { html! {} } }
                                <div class="pricing-header">
                                    <h3>{ plan.name }</h3>
                                    <div class="price">{ plan.price }<span>{"/month"}</span></div>
                                    <p class="price-desc">{ plan.blurb }</p>
                                </div>
                                <ul class="pricing-features">
                                    { for plan.features.iter().map(|f| html! { <li>{ *f }</li> }) }
                                </ul>
                                <PricingButton label={plan.button} featured={plan.featured} />
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="faq" id="faq">
                <div class="container">
                    <h2 class="section-title">{"Frequently Asked Questions"}</h2>
                    <FaqList entries={faq_entries()} />
                </div>
            </section>

            <section class="final-cta">
                <div class="container">
                    <h2 class="section-title">{"Ready to Turn Conversations Into Revenue?"}</h2>
                    <p class="section-subtitle">{"Join 1000+ companies automating their sales with Convex."}</p>
                    <FinalCta />
                </div>
            </section>

            <footer class="footer" id="footer">
                <div class="container">
                    <div class="footer-content">
                        <div class="footer-section">
                            <h3>{"Convex"}</h3>
                            <p>{"Turn conversations into customers with AI-powered sales automation that works 24/7."}</p>
                            <div class="social-links">
                                <SectionLink href="#">{"Twitter"}</SectionLink>
                                <SectionLink href="#">{"LinkedIn"}</SectionLink>
                                <SectionLink href="#">{"GitHub"}</SectionLink>
                            </div>
                        </div>
                        <div class="footer-section">
                            <h4>{"Product"}</h4>
                            <ul>
                                <li><SectionLink href="#features">{"Features"}</SectionLink></li>
                                <li><SectionLink href="#pricing">{"Pricing"}</SectionLink></li>
                                <li><SectionLink href="#faq">{"FAQ"}</SectionLink></li>
                                <li><SectionLink href="#">{"Documentation"}</SectionLink></li>
                            </ul>
                        </div>
                        { footer_links("Company", &["About", "Careers", "Contact", "Blog"]) }
                        { footer_links("Legal", &["Privacy Policy", "Terms of Service", "Cookie Policy"]) }
                    </div>
                    <div class="footer-bottom">
                        <p>{"© 2024 Convex AI. All rights reserved."}</p>
                        <div class="footer-stats">
                            <span>{"SOC 2 Certified"}</span>
                            <span>{"GDPR Compliant"}</span>
                            <span>{"99.9% Uptime"}</span>
                        </div>
                    </div>
                </div>
            </footer>

            <ScrollToTop />
        </div>
    }
}
