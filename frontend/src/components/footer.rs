use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::config;

pub fn copyright_line(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, config::OWNER_NAME)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-social">
                    <a href="https://github.com/" target="_blank" rel="noopener">{"GitHub"}</a>
                    <a href="https://www.linkedin.com/" target="_blank" rel="noopener">{"LinkedIn"}</a>
                </div>
                <p id="year-line">{copyright_line(year)}</p>
            </div>
            <style>
                {r#"
                    .site-footer {
                        padding: 2.5rem 2rem;
                        text-align: center;
                        color: #64748b;
                        border-top: 1px solid rgba(255, 255, 255, 0.06);
                    }
                    .footer-social {
                        display: flex;
                        justify-content: center;
                        gap: 1.5rem;
                        margin-bottom: 1rem;
                    }
                    .footer-social a {
                        color: #94a3b8;
                        text-decoration: none;
                    }
                    .footer-social a:hover {
                        color: #60a5fa;
                    }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_the_year_and_owner() {
        assert_eq!(copyright_line(2026), "© 2026 Ashley. All rights reserved.");
    }
}
