// Text rendering of the dashboard state
use crate::domain::dashboard::DashboardState;
use crate::domain::elapsed::format_elapsed;
use std::fmt::Write;

const LABEL_WIDTH: usize = 12;

pub fn render(state: &DashboardState) -> String {
    let mut out = format_elapsed(state.elapsed_seconds);
    for (position, feed) in state.feeds.iter() {
        let _ = write!(
            out,
            "\n{:<width$} image: {}  mask: {}",
            position.label(),
            feed.image,
            feed.mask,
            width = LABEL_WIDTH
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_initial_state() {
        let state = DashboardState::new("/p.jpg");

        assert_eq!(
            render(&state),
            "0:00:00\n\
             Front Left   image: /p.jpg  mask: /p.jpg\n\
             Front Right  image: /p.jpg  mask: /p.jpg\n\
             Back Left    image: /p.jpg  mask: /p.jpg\n\
             Back Right   image: /p.jpg  mask: /p.jpg"
        );
    }

    #[test]
    fn test_render_shows_formatted_clock() {
        let mut state = DashboardState::new("/p.jpg");
        state.elapsed_seconds = 3661;

        assert!(render(&state).starts_with("1:01:01\n"));
    }
}
