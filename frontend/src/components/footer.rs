use chrono::{Datelike, Utc};
use yew::prelude::*;

use crate::content::COMPANY;
use crate::i18n::use_i18n;

#[function_component(Footer)]
pub fn footer() -> Html {
    let i18n = use_i18n();
    let year = Utc::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        border-top: 1px solid rgba(0, 212, 255, 0.1);
                        padding: 3rem 1.5rem;
                        color: rgba(255, 255, 255, 0.6);
                        font-size: 0.9rem;
                    }
                    .footer-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: space-between;
                        gap: 1.5rem;
                    }
                    .footer-links {
                        display: flex;
                        gap: 1.25rem;
                    }
                    .footer-links a {
                        color: rgba(255, 255, 255, 0.7);
                        text-decoration: none;
                    }
                    .footer-links a:hover {
                        color: #00d4ff;
                    }
                "#}
            </style>
            <div class="footer-content">
                <div>
                    <strong>{COMPANY.name}</strong>
                    <p>{COMPANY.tagline}</p>
                    <p>{format!("{}: {}", i18n.t("footer.ceo"), COMPANY.ceo)}</p>
                </div>
                <div class="footer-links">
                    <a href={COMPANY.phone_link}>{COMPANY.phone}</a>
                    <a href={COMPANY.email_link}>{COMPANY.email}</a>
                    <a href={COMPANY.telegram_link} target="_blank" rel="noopener noreferrer">{COMPANY.telegram}</a>
                    <a href={COMPANY.instagram_link} target="_blank" rel="noopener noreferrer">{COMPANY.instagram}</a>
                </div>
                <p>{format!("© {} {}. {}", year, COMPANY.name, i18n.t("footer.rights"))}</p>
            </div>
        </footer>
    }
}
