//! Contact form, contact details and social links.

use folio_core::ContactForm;
use folio_core::config::CONTACT_SUBMIT_DELAY_MS;
use folio_core::content::{CONTACT_INFO, Link, SOCIAL_LINKS};
use gloo_timers::callback::Timeout;
use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use super::shared;
use crate::app::{AppContext, Toast};
use crate::components::icons as ic;
use crate::components::window::{PromptLine, SectionHeading, WindowBar};

stylance::import_crate_style!(css, "src/components/sections/contact.module.css");

// ============================================================================
// Form
// ============================================================================

/// Which form field an input edits.
#[derive(Clone, Copy)]
enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    fn get(self, form: &ContactForm) -> &String {
        match self {
            Self::Name => &form.name,
            Self::Email => &form.email,
            Self::Subject => &form.subject,
            Self::Message => &form.message,
        }
    }

    fn get_mut(self, form: &mut ContactForm) -> &mut String {
        match self {
            Self::Name => &mut form.name,
            Self::Email => &mut form.email,
            Self::Subject => &mut form.subject,
            Self::Message => &mut form.message,
        }
    }
}

#[component]
fn ContactFormWindow() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let form = RwSignal::new(ContactForm::default());
    let submitting = RwSignal::new(false);
    let pending = StoredValue::new_local(None::<Timeout>);

    let value = move |field: Field| move || form.with(|f| field.get(f).clone());
    let edit = move |field: Field| {
        move |ev: ev::Event| {
            let text = event_target_value(&ev);
            form.update(|f| *field.get_mut(f) = text);
        }
    };

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        if let Err(err) = form.with_untracked(ContactForm::validate) {
            ctx.notify(Toast::error("Error", err.to_string()));
            return;
        }

        submitting.set(true);
        let timer = Timeout::new(CONTACT_SUBMIT_DELAY_MS, move || {
            // Component may be gone by now.
            if form.try_update(ContactForm::clear).is_none() {
                return;
            }
            submitting.try_set(false);
            ctx.notify(Toast::success(
                "Message Sent Successfully!",
                "Thank you for reaching out. I'll get back to you soon.",
            ));
        });
        pending.try_set_value(Some(timer));
    };

    view! {
        <div class=format!("{} {}", shared::window, shared::windowGlow)>
            <WindowBar title="send_message.form" />
            <form class=format!("{} {}", shared::body, css::form) on:submit=handle_submit>
                <div class=css::row>
                    <label class=css::field>
                        <span class=css::label><Icon icon=ic::USER />"Name"</span>
                        <input
                            class=css::input
                            type="text"
                            name="name"
                            placeholder="Your name"
                            prop:value=value(Field::Name)
                            on:input=edit(Field::Name)
                        />
                    </label>
                    <label class=css::field>
                        <span class=css::label><Icon icon=ic::MAIL />"Email"</span>
                        <input
                            class=css::input
                            type="email"
                            name="email"
                            placeholder="your.email@example.com"
                            prop:value=value(Field::Email)
                            on:input=edit(Field::Email)
                        />
                    </label>
                </div>

                <label class=css::field>
                    <span class=css::label><Icon icon=ic::MESSAGE />"Subject"</span>
                    <input
                        class=css::input
                        type="text"
                        name="subject"
                        placeholder="What's this about?"
                        prop:value=value(Field::Subject)
                        on:input=edit(Field::Subject)
                    />
                </label>

                <label class=css::field>
                    <span class=css::label>"Message"</span>
                    <textarea
                        class=format!("{} {}", css::input, css::textarea)
                        name="message"
                        rows="6"
                        placeholder="Tell me about your project, opportunity, or just say hello!"
                        prop:value=value(Field::Message)
                        on:input=edit(Field::Message)
                    ></textarea>
                </label>

                <button type="submit" class=format!("{} {}", shared::button, css::submit) disabled=move || submitting.get()>
                    <Icon icon=ic::SEND />
                    {move || if submitting.get() { "Sending..." } else { "Send Message" }}
                </button>
            </form>
        </div>
    }
}

// ============================================================================
// Details
// ============================================================================

#[component]
fn LinkList(links: &'static [Link], external: bool) -> impl IntoView {
    links
        .iter()
        .map(|link| {
            let target = external.then_some("_blank");
            let rel = external.then_some("noopener noreferrer");
            view! {
                <a class=css::link href=link.href target=target rel=rel>
                    <span class=css::linkIcon><Icon icon=ic::for_link(link.label) /></span>
                    <span>
                        <span class=css::linkLabel>{link.label}</span>
                        <span class=css::linkValue>{link.value}</span>
                    </span>
                </a>
            }
        })
        .collect_view()
}

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class=format!("{} {}", shared::section, shared::sectionTinted)>
            <div class=shared::container>
                <SectionHeading
                    title="Get In Touch"
                    lead="Ready to collaborate on your next DevOps project or discuss opportunities? Let's connect and build something amazing together."
                />

                <div class=css::layout>
                    <ContactFormWindow />

                    <div class=css::aside>
                        <div class=shared::window>
                            <WindowBar title="contact_info.json" />
                            <div class=format!("{} {}", shared::body, css::links)>
                                <LinkList links=CONTACT_INFO external=false />
                            </div>
                        </div>

                        <div class=shared::window>
                            <WindowBar title="social_links.json" />
                            <div class=format!("{} {}", shared::body, css::links)>
                                <LinkList links=SOCIAL_LINKS external=true />
                            </div>
                        </div>

                        <div class=format!("{} {}", shared::card, css::coffee)>
                            <span class=css::coffeeIcon><Icon icon=ic::COFFEE /></span>
                            <h3 class=css::coffeeTitle>"Let's grab a virtual coffee!"</h3>
                            <p class=css::coffeeText>
                                "I'm always up for a chat about DevOps, cloud architecture, or the latest in tech."
                            </p>
                        </div>
                    </div>
                </div>

                <div class=shared::cta>
                    <div class=format!("{} {}", shared::window, shared::ctaWindow)>
                        <WindowBar title="collaboration.invite" />
                        <div class=shared::body>
                            <PromptLine text="./start_collaboration.sh --with-jyothi" />
                            <p class=css::inviteTitle>"Open for opportunities"</p>
                            <p class=css::inviteText>
                                "Platform engineering roles, DevOps consulting, cloud migrations and open source collaborations."
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
