//! Play pages: direct play, its result, and the random play-through.

use axum::response::Html;
use quiz_core::quiz::Quiz;
use quiz_play::application::direct_play::CheckResult;
use quiz_play::application::random_play::RandomCheckResult;

use super::escape;
use super::layout::page;
use crate::session::Flash;

fn answer_form(action: &str, answer: &str) -> String {
    format!(
        "<form method=\"get\" action=\"{action}\">\
         <input type=\"text\" name=\"answer\" value=\"{answer}\" placeholder=\"Answer\" \
         autocomplete=\"off\" autofocus> <button type=\"submit\">Check</button></form>",
        action = escape(action),
        answer = escape(answer),
    )
}

fn verdict(correct: bool) -> &'static str {
    if correct {
        "<p class=\"correct\">Correct!</p>"
    } else {
        "<p class=\"incorrect\">Wrong answer.</p>"
    }
}

/// Question of quiz `quiz` with an answer box prefilled with `answer`.
#[must_use]
pub fn play(flashes: &[Flash], quiz: &Quiz, answer: &str) -> Html<String> {
    let body = format!(
        "<p>{question}</p>{form}",
        question = escape(&quiz.question),
        form = answer_form(&format!("/quizzes/{}/check", quiz.id), answer),
    );
    page("Play", flashes, &body)
}

/// Outcome of a direct play answer.
#[must_use]
pub fn result(flashes: &[Flash], result: &CheckResult) -> Html<String> {
    let retry = if result.correct {
        String::new()
    } else {
        format!(
            "<a href=\"/quizzes/{id}/play?answer={answer}\">Try again</a> ",
            id = result.quiz.id,
            answer = escape(&urlencoding::encode(&result.answer)),
        )
    };
    let body = format!(
        "<p>{question}</p><p>Your answer: <b>{answer}</b></p>{verdict}\
         <p>{retry}<a href=\"/quizzes\">Back to the quizzes</a></p>",
        question = escape(&result.quiz.question),
        answer = escape(&result.answer),
        verdict = verdict(result.correct),
    );
    page("Result", flashes, &body)
}

/// Next question of the random play-through.
#[must_use]
pub fn random_play(flashes: &[Flash], quiz: &Quiz, score: usize) -> Html<String> {
    let body = format!(
        "<p>Score: {score}</p><p>{question}</p>{form}",
        question = escape(&quiz.question),
        form = answer_form(&format!("/quizzes/randomcheck/{}", quiz.id), ""),
    );
    page("Random play", flashes, &body)
}

/// Every quiz has been answered correctly.
#[must_use]
pub fn random_none(flashes: &[Flash], score: usize) -> Html<String> {
    let body = format!(
        "<p>There are no more quizzes to answer.</p><p>Final score: {score}</p>\
         <p><a href=\"/quizzes/randomplay\">Play again</a></p>"
    );
    page("Random play finished", flashes, &body)
}

/// Outcome of a random play answer.
#[must_use]
pub fn random_result(flashes: &[Flash], result: &RandomCheckResult) -> Html<String> {
    let next = if result.correct {
        "<a href=\"/quizzes/randomplay\">Next question</a>"
    } else {
        "<a href=\"/quizzes/randomplay\">Start again</a>"
    };
    let body = format!(
        "<p>Your answer: <b>{answer}</b></p>{verdict}<p>Score: {score}</p><p>{next}</p>",
        answer = escape(&result.answer),
        verdict = verdict(result.correct),
        score = result.score,
    );
    page("Random play result", flashes, &body)
}

#[cfg(test)]
mod tests {
    use quiz_test_support::fixed_now;

    use super::*;

    fn quiz() -> Quiz {
        Quiz {
            id: 7,
            question: "Capital of Italy".into(),
            answer: "Rome".into(),
            created_at: fixed_now(),
            updated_at: fixed_now(),
        }
    }

    #[test]
    fn test_play_form_targets_check_route_with_prefill() {
        let Html(html) = play(&[], &quiz(), "Ro");

        assert!(html.contains("action=\"/quizzes/7/check\""));
        assert!(html.contains("value=\"Ro\""));
    }

    #[test]
    fn test_wrong_result_offers_retry_with_answer() {
        let checked = CheckResult {
            quiz: quiz(),
            answer: "San Marino".into(),
            correct: false,
        };

        let Html(html) = result(&[], &checked);

        assert!(html.contains("Wrong answer."));
        assert!(html.contains("/quizzes/7/play?answer=San%20Marino"));
    }

    #[test]
    fn test_random_result_shows_score() {
        let checked = RandomCheckResult {
            quiz_id: 7,
            answer: "rome".into(),
            correct: true,
            score: 3,
        };

        let Html(html) = random_result(&[], &checked);

        assert!(html.contains("Correct!"));
        assert!(html.contains("Score: 3"));
        assert!(html.contains("Next question"));
    }

    #[test]
    fn test_retry_link_percent_encodes_reserved_characters() {
        let checked = CheckResult {
            quiz: quiz(),
            answer: "a&b=c ñ".into(),
            correct: false,
        };

        let Html(html) = result(&[], &checked);

        assert!(html.contains("/quizzes/7/play?answer=a%26b%3Dc%20%C3%B1"));
    }
}
