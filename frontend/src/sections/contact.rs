use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::magnetic::MagneticButton;
use crate::components::particle_field::ParticleField;
use crate::components::split_text::SplitText;
use crate::config;
use crate::contact::{arm_reset, submit, ContactForm, Field, FieldError, StatusEvent, SubmitStatus};
use crate::content::COMPANY;
use crate::i18n::use_i18n;

#[function_component(Contact)]
pub fn contact() -> Html {
    let i18n = use_i18n();
    let form = use_state(ContactForm::default);
    let errors = use_state(Vec::<FieldError>::new);
    let status = use_reducer(SubmitStatus::default);

    // Success and error messages fall back to the idle form after a while.
    {
        let current = *status;
        let status = status.clone();
        use_effect_with_deps(
            move |current| {
                let reset = arm_reset(*current, config::STATUS_RESET_MS, move |event| status.dispatch(event));
                move || drop(reset)
            },
            current,
        );
    }

    let on_input = |field: Field| {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |e: InputEvent| {
            let value = match field {
                Field::Message => e.target_unchecked_into::<HtmlTextAreaElement>().value(),
                _ => e.target_unchecked_into::<HtmlInputElement>().value(),
            };
            let mut next = (*form).clone();
            next.set(field, value);
            if !errors.is_empty() {
                errors.set(next.validate());
            }
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let errors = errors.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *status == SubmitStatus::Submitting {
                return;
            }
            let problems = form.validate();
            if !problems.is_empty() {
                errors.set(problems);
                return;
            }
            errors.set(Vec::new());
            status.dispatch(StatusEvent::Submit);

            let form = form.clone();
            let status = status.clone();
            spawn_local(async move {
                match submit(config::get_form_endpoint(), &form).await {
                    Ok(()) => {
                        info!("Contact request sent");
                        form.set(ContactForm::default());
                        status.dispatch(StatusEvent::Succeeded);
                    }
                    Err(err) => {
                        gloo_console::error!(format!("Failed to send contact request: {}", err));
                        status.dispatch(StatusEvent::Failed);
                    }
                }
            });
        })
    };

    let error_for = |field: Field| -> Html {
        match errors.iter().find(|err| err.field() == field) {
            Some(FieldError::InvalidEmail) => html! {
                <span class="field-error">{i18n.t("cta.form.invalidEmail")}</span>
            },
            Some(FieldError::Missing(_)) => html! {
                <span class="field-error">{i18n.t("cta.form.required")}</span>
            },
            None => html! {},
        }
    };

    let submitting = *status == SubmitStatus::Submitting;

    html! {
        <section id="contact" class="section contact-section">
            <style>
                {r#"
                    .contact-section {
                        position: relative;
                        overflow: hidden;
                    }
                    .contact-section .particle-field {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        opacity: 0.6;
                    }
                    .contact-layout {
                        position: relative;
                        z-index: 1;
                        display: grid;
                        grid-template-columns: 3fr 2fr;
                        gap: 3rem;
                    }
                    .contact-form {
                        display: grid;
                        gap: 1rem;
                    }
                    .form-row {
                        display: grid;
                        gap: 0.35rem;
                    }
                    .contact-form input,
                    .contact-form textarea {
                        width: 100%;
                        box-sizing: border-box;
                        padding: 0.9rem 1rem;
                        border-radius: 12px;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(10, 15, 28, 0.6);
                        color: white;
                        font: inherit;
                    }
                    .contact-form input:focus,
                    .contact-form textarea:focus {
                        outline: none;
                        border-color: #00d4ff;
                    }
                    .contact-form .has-error input {
                        border-color: #ef4444;
                    }
                    .field-error {
                        color: #ef4444;
                        font-size: 0.8rem;
                    }
                    .form-status {
                        padding: 1rem;
                        border-radius: 12px;
                    }
                    .form-status.success {
                        background: rgba(34, 197, 94, 0.15);
                        color: #22c55e;
                    }
                    .form-status.error {
                        background: rgba(239, 68, 68, 0.15);
                        color: #ef4444;
                    }
                    .contact-details a {
                        display: block;
                        color: white;
                        text-decoration: none;
                        margin-bottom: 1rem;
                    }
                    .contact-details small {
                        display: block;
                        color: rgba(255, 255, 255, 0.5);
                    }
                    @media (max-width: 768px) {
                        .contact-layout {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <ParticleField count={80} connection_distance={100.0} />
            <div class="container">
                <header class="section-header">
                    <h2 class="section-title"><SplitText text={i18n.t("cta.title")} /></h2>
                    <p class="section-subtitle">{i18n.t("cta.subtitle")}</p>
                </header>
                <div class="contact-layout">
                    <form class="card contact-form" onsubmit={on_submit} novalidate=true>
                        <div class={classes!("form-row", errors.iter().any(|e| e.field() == Field::Name).then_some("has-error"))}>
                            <input
                                type="text"
                                name="name"
                                placeholder={i18n.t("cta.form.name")}
                                value={form.name.clone()}
                                oninput={on_input(Field::Name)}
                                required=true
                            />
                            {error_for(Field::Name)}
                        </div>
                        <div class={classes!("form-row", errors.iter().any(|e| e.field() == Field::Email).then_some("has-error"))}>
                            <input
                                type="email"
                                name="email"
                                placeholder={i18n.t("cta.form.email")}
                                value={form.email.clone()}
                                oninput={on_input(Field::Email)}
                                required=true
                            />
                            {error_for(Field::Email)}
                        </div>
                        <div class={classes!("form-row", errors.iter().any(|e| e.field() == Field::Phone).then_some("has-error"))}>
                            <input
                                type="tel"
                                name="phone"
                                placeholder={i18n.t("cta.form.phone")}
                                value={form.phone.clone()}
                                oninput={on_input(Field::Phone)}
                                required=true
                            />
                            {error_for(Field::Phone)}
                        </div>
                        <div class="form-row">
                            <input
                                type="text"
                                name="company"
                                placeholder={i18n.t("cta.form.company")}
                                value={form.company.clone()}
                                oninput={on_input(Field::Company)}
                            />
                        </div>
                        <div class="form-row">
                            <textarea
                                name="message"
                                rows="4"
                                placeholder={i18n.t("cta.form.message")}
                                value={form.message.clone()}
                                oninput={on_input(Field::Message)}
                            />
                        </div>
                        {
                            match *status {
                                SubmitStatus::Success => html! {
                                    <div class="form-status success" role="status">{i18n.t("cta.form.success")}</div>
                                },
                                SubmitStatus::Error => html! {
                                    <div class="form-status error" role="alert">{i18n.t("cta.form.error")}</div>
                                },
                                SubmitStatus::Idle | SubmitStatus::Submitting => html! {},
                            }
                        }
                        <MagneticButton class="btn btn-primary" button_type="submit" disabled={submitting}>
                            {
                                if submitting {
                                    i18n.t("cta.form.submitting")
                                } else {
                                    i18n.t("cta.form.submit")
                                }
                            }
                        </MagneticButton>
                    </form>
                    <aside class="card contact-details">
                        <h3>{i18n.t("cta.contact.title")}</h3>
                        <a href={COMPANY.phone_link}>
                            <small>{i18n.t("cta.contact.phone")}</small>{COMPANY.phone}
                        </a>
                        <a href={COMPANY.email_link}>
                            <small>{i18n.t("cta.contact.email")}</small>{COMPANY.email}
                        </a>
                        <a href={COMPANY.telegram_link} target="_blank" rel="noopener noreferrer">
                            <small>{i18n.t("cta.contact.telegram")}</small>{COMPANY.telegram}
                        </a>
                        <a href={COMPANY.instagram_link} target="_blank" rel="noopener noreferrer">
                            <small>{i18n.t("cta.contact.instagram")}</small>{COMPANY.instagram}
                        </a>
                        <p>{format!("{}: {}", i18n.t("footer.ceo"), COMPANY.ceo)}</p>
                    </aside>
                </div>
            </div>
        </section>
    }
}
