//! Investor cover letter.

use leptos::prelude::*;

use super::{Card, CardContent};
use crate::catalog::CoverLetter;

/// Salutation, one paragraph per entry, sign-off.
#[component]
pub fn CoverLetterCard(letter: CoverLetter) -> impl IntoView {
    view! {
        <section class="cover-letter" data-section="cover-letter">
            <Card class="cover-letter-card">
                <CardContent>
                    <h4 class="cover-letter-title">{letter.title}</h4>
                    {letter
                        .paragraphs
                        .into_iter()
                        .map(|paragraph| view! { <p class="cover-letter-paragraph">{paragraph}</p> })
                        .collect_view()}
                    <p class="cover-letter-closing">{letter.closing}</p>
                </CardContent>
            </Card>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::render_html;

    #[test]
    fn renders_every_paragraph_in_order() {
        let letter = CoverLetter {
            title: "Dear Techstars Team,".into(),
            paragraphs: vec!["First.".into(), "Second.".into(), "Third.".into()],
            closing: "Sincerely, the W3BOTS Team".into(),
        };
        let html = render_html(move || view! { <CoverLetterCard letter=letter /> });

        assert_eq!(html.matches("cover-letter-paragraph").count(), 3);
        let first = html.find("First.").unwrap();
        let third = html.find("Third.").unwrap();
        let closing = html.find("Sincerely").unwrap();
        assert!(first < third && third < closing);
    }
}
