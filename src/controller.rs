//! Wires user interactions to the fetch → map → render pipelines.

use crate::WidgetError;
use crate::catalog::{TvMazeClient, to_episode, to_show};
use crate::view::{EpisodePanel, ShowListView};

/// Owns the catalog client and both panels and runs the two interaction
/// pipelines: show search and per-card episode fetch.
///
/// Both pipelines are whole-batch atomic: if any record fails to map, the
/// batch is abandoned before rendering and the panels keep their previous
/// content. Renders fully replace panel content, so when the caller runs
/// several interactions the last render wins.
pub struct Controller {
    client: TvMazeClient,
    show_list: ShowListView,
    episode_panel: EpisodePanel,
}

impl Controller {
    /// Creates a controller with empty panels. One controller lives for the
    /// whole session; all panel state is held here rather than in globals.
    pub fn new(client: TvMazeClient) -> Self {
        Self {
            client,
            show_list: ShowListView::new(),
            episode_panel: EpisodePanel::new(),
        }
    }

    /// Searches the catalog and replaces the show panel with the results.
    ///
    /// Hides the episode panel first: its content belonged to a selection
    /// from the previous result set. Returns the number of shows rendered.
    pub fn search(&mut self, term: &str) -> Result<usize, WidgetError> {
        let records = self.client.search_shows(term)?;
        let shows = records
            .into_iter()
            .map(to_show)
            .collect::<Result<Vec<_>, _>>()?;

        self.episode_panel.hide();
        self.show_list.render(&shows);
        Ok(shows.len())
    }

    /// Fetches and renders the episode list for the card at `card_index`.
    ///
    /// The index refers to the current show panel, in render order. Returns
    /// the number of episodes rendered; the panel becomes visible on success.
    pub fn fetch_episodes(&mut self, card_index: usize) -> Result<usize, WidgetError> {
        let show_id = self
            .show_list
            .show_id_at(card_index)
            .ok_or(WidgetError::UnknownCard { index: card_index })?;

        let records = self.client.list_episodes(show_id)?;
        let episodes = records
            .into_iter()
            .map(to_episode)
            .collect::<Result<Vec<_>, _>>()?;

        self.episode_panel.render(&episodes);
        Ok(episodes.len())
    }

    /// The search-results panel.
    pub fn show_list(&self) -> &ShowListView {
        &self.show_list
    }

    /// The episode panel.
    pub fn episode_panel(&self) -> &EpisodePanel {
        &self.episode_panel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::MISSING_ARTWORK_URL;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn start_server() -> (tokio::runtime::Runtime, MockServer) {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let server = runtime.block_on(MockServer::start());
        (runtime, server)
    }

    fn controller_for(server: &MockServer) -> Controller {
        Controller::new(TvMazeClient::with_base_url(server.uri()))
    }

    fn bletchley_record(image: serde_json::Value) -> serde_json::Value {
        json!({
            "score": 0.91,
            "show": {
                "id": 1767,
                "name": "The Bletchley Circle",
                "summary": "<p>Four women who helped end World War II.</p>",
                "image": image
            }
        })
    }

    fn show_panel_text(controller: &Controller) -> String {
        let mut buffer = Vec::new();
        controller.show_list().write_to(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    fn episode_panel_text(controller: &Controller) -> String {
        let mut buffer = Vec::new();
        controller.episode_panel().write_to(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn search_renders_one_card_per_result() {
        let (runtime, server) = start_server();
        runtime.block_on(
            Mock::given(method("GET"))
                .and(path("/search/shows"))
                .and(query_param("q", "bletchley"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                    bletchley_record(json!({
                        "medium": "http://static.tvmaze.com/uploads/images/medium_portrait/147/369403.jpg"
                    }))
                ])))
                .mount(&server),
        );

        let mut controller = controller_for(&server);
        let count = controller.search("bletchley").unwrap();

        assert_eq!(count, 1);
        assert_eq!(controller.show_list().show_id_at(0), Some(1767));

        let text = show_panel_text(&controller);
        assert!(text.contains("The Bletchley Circle"));
        assert!(text.contains(
            "http://static.tvmaze.com/uploads/images/medium_portrait/147/369403.jpg"
        ));
    }

    #[test]
    fn search_result_without_artwork_renders_the_placeholder() {
        let (runtime, server) = start_server();
        runtime.block_on(
            Mock::given(method("GET"))
                .and(path("/search/shows"))
                .respond_with(
                    ResponseTemplate::new(200)
                        .set_body_json(json!([bletchley_record(json!(null))])),
                )
                .mount(&server),
        );

        let mut controller = controller_for(&server);
        controller.search("bletchley").unwrap();

        assert!(show_panel_text(&controller).contains(MISSING_ARTWORK_URL));
    }

    #[test]
    fn selecting_a_card_fetches_and_reveals_its_episodes() {
        let (runtime, server) = start_server();
        runtime.block_on(async {
            Mock::given(method("GET"))
                .and(path("/search/shows"))
                .respond_with(
                    ResponseTemplate::new(200)
                        .set_body_json(json!([bletchley_record(json!(null))])),
                )
                .mount(&server)
                .await;
            Mock::given(method("GET"))
                .and(path("/shows/1767/episodes"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                    { "id": 1, "name": "Pilot", "season": 1, "number": 1 }
                ])))
                .mount(&server)
                .await;
        });

        let mut controller = controller_for(&server);
        controller.search("bletchley").unwrap();

        assert!(!controller.episode_panel().is_visible());

        let count = controller.fetch_episodes(0).unwrap();

        assert_eq!(count, 1);
        assert!(controller.episode_panel().is_visible());

        let text = episode_panel_text(&controller);
        assert!(text.contains("Pilot"));
        assert!(text.contains("Number 1"));
    }

    #[test]
    fn a_new_search_hides_the_episode_panel() {
        let (runtime, server) = start_server();
        runtime.block_on(async {
            Mock::given(method("GET"))
                .and(path("/search/shows"))
                .respond_with(
                    ResponseTemplate::new(200)
                        .set_body_json(json!([bletchley_record(json!(null))])),
                )
                .mount(&server)
                .await;
            Mock::given(method("GET"))
                .and(path("/shows/1767/episodes"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                    { "id": 1, "name": "Pilot", "season": 1, "number": 1 }
                ])))
                .mount(&server)
                .await;
        });

        let mut controller = controller_for(&server);
        controller.search("bletchley").unwrap();
        controller.fetch_episodes(0).unwrap();
        assert!(controller.episode_panel().is_visible());

        controller.search("bletchley").unwrap();
        assert!(!controller.episode_panel().is_visible());
    }

    #[test]
    fn the_later_search_wins_on_the_shared_panel() {
        let (runtime, server) = start_server();
        runtime.block_on(async {
            Mock::given(method("GET"))
                .and(path("/search/shows"))
                .and(query_param("q", "first"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                    { "show": { "id": 1, "name": "First Show", "summary": "a", "image": null } }
                ])))
                .mount(&server)
                .await;
            Mock::given(method("GET"))
                .and(path("/search/shows"))
                .and(query_param("q", "second"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                    { "show": { "id": 2, "name": "Second Show", "summary": "b", "image": null } }
                ])))
                .mount(&server)
                .await;
        });

        let mut controller = controller_for(&server);
        controller.search("first").unwrap();
        controller.search("second").unwrap();

        let text = show_panel_text(&controller);
        assert!(text.contains("Second Show"));
        assert!(!text.contains("First Show"));
    }

    #[test]
    fn a_failed_search_keeps_the_previous_results() {
        let (runtime, server) = start_server();
        runtime.block_on(async {
            Mock::given(method("GET"))
                .and(path("/search/shows"))
                .and(query_param("q", "good"))
                .respond_with(
                    ResponseTemplate::new(200)
                        .set_body_json(json!([bletchley_record(json!(null))])),
                )
                .mount(&server)
                .await;
            Mock::given(method("GET"))
                .and(path("/search/shows"))
                .and(query_param("q", "bad"))
                .respond_with(ResponseTemplate::new(500))
                .mount(&server)
                .await;
        });

        let mut controller = controller_for(&server);
        controller.search("good").unwrap();

        let result = controller.search("bad");
        assert!(matches!(result, Err(WidgetError::Network(_))));

        // The panel still reflects the last successful render
        assert!(show_panel_text(&controller).contains("The Bletchley Circle"));
    }

    #[test]
    fn one_malformed_record_aborts_the_whole_batch() {
        let (runtime, server) = start_server();
        runtime.block_on(
            Mock::given(method("GET"))
                .and(path("/search/shows"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                    { "show": { "id": 1, "name": "Fine", "summary": "a", "image": null } },
                    { "show": { "id": 2, "summary": "missing a name" } }
                ])))
                .mount(&server),
        );

        let mut controller = controller_for(&server);
        let result = controller.search("anything");

        assert!(matches!(result, Err(WidgetError::Shape(_))));
        assert!(controller.show_list().is_empty());
    }

    #[test]
    fn selecting_a_card_outside_the_result_set_is_rejected() {
        let (runtime, server) = start_server();
        runtime.block_on(
            Mock::given(method("GET"))
                .and(path("/search/shows"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
                .mount(&server),
        );

        let mut controller = controller_for(&server);
        controller.search("nothing").unwrap();

        match controller.fetch_episodes(0) {
            Err(WidgetError::UnknownCard { index }) => assert_eq!(index, 0),
            other => panic!("expected an unknown-card error, got {:?}", other),
        }
    }
}
