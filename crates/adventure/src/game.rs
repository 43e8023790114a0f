//! The interactive room-to-room loop.

use adventure_clock::TimeService;
use adventure_graph::{Graph, GraphError, Role, Room, RoomId};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use crate::AdventureError;

/// Reserved input that asks for the current time.
pub const TIME_COMMAND: &str = "time";

/// Text shown when asking for the next room.
pub const PROMPT: &str = "WHERE TO? >";

const INVALID_INPUT: &str = "HUH? I DON'T UNDERSTAND THAT ROOM. TRY AGAIN.";

/// Outcome of feeding one line of input to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The player asked for the time. The room does not change.
    Time,
    /// The player moved to this room.
    Moved(RoomId),
    /// The input was neither `time` nor a neighbouring room's name.
    Invalid,
}

/// Decides what `input` means in room `current`.
///
/// Matching is exact and case-sensitive, for both `time` and room names.
pub fn step(graph: &Graph, current: RoomId, input: &str) -> Step {
    if input == TIME_COMMAND {
        return Step::Time;
    }
    match graph.neighbour_named(current, input) {
        Some(next) => Step::Moved(next),
        None => Step::Invalid,
    }
}

/// Final result of a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Rooms entered, in order. The start room is not included.
    pub path: Vec<String>,
}

impl Summary {
    pub fn steps(&self) -> usize {
        self.path.len()
    }
}

/// One play-through of a map.
///
/// Only reads the graph; all mutable state is the current room and the
/// path taken so far.
#[derive(Debug)]
pub struct GameLoop<'g> {
    graph: &'g Graph,
    current: RoomId,
    path: Vec<RoomId>,
}

impl<'g> GameLoop<'g> {
    /// Starts a game in the map's start room.
    pub fn new(graph: &'g Graph) -> Result<Self, GraphError> {
        let start = graph.start()?.id();
        Ok(Self {
            graph,
            current: start,
            path: Vec::new(),
        })
    }

    pub fn current(&self) -> &Room {
        &self.graph.rooms()[self.current.index()]
    }

    /// `true` once the player stands in the end room.
    pub fn is_finished(&self) -> bool {
        self.current().role() == Role::End
    }

    /// Names of the rooms entered so far.
    pub fn path(&self) -> Vec<&str> {
        self.path
            .iter()
            .map(|&id| self.graph.rooms()[id.index()].name())
            .collect()
    }

    pub fn steps(&self) -> usize {
        self.path.len()
    }

    /// Applies one line of input. Moves are recorded in the path; time
    /// requests and invalid input leave the game untouched.
    pub fn advance(&mut self, input: &str) -> Step {
        let outcome = step(self.graph, self.current, input);
        if let Step::Moved(next) = outcome {
            self.current = next;
            self.path.push(next);
            debug!(room = self.current().name(), steps = self.path.len(), "moved");
        }
        outcome
    }

    pub fn summary(&self) -> Summary {
        Summary {
            path: self.path().into_iter().map(str::to_string).collect(),
        }
    }

    /// The room description shown before each prompt.
    ///
    /// Connections are comma separated and the last one ends with a period.
    pub fn menu(&self) -> String {
        let room = self.current();
        format!(
            "CURRENT LOCATION: {}\nPOSSIBLE CONNECTIONS: {}.\n",
            room.name(),
            self.graph.connection_names(room.id()).join(", ")
        )
    }

    /// Drives the game until the end room is reached.
    ///
    /// Reads one line per turn from `input` and writes everything the
    /// player sees to `output`. A `time` request is served by `clock`
    /// and followed by a bare prompt, without repeating the room menu.
    pub async fn run<R, W>(
        &mut self,
        mut input: R,
        mut output: W,
        clock: &mut TimeService,
    ) -> Result<Summary, AdventureError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!(start = self.current().name(), "game started");
        let mut show_menu = true;
        let mut line = String::new();

        while !self.is_finished() {
            if show_menu {
                output.write_all(self.menu().as_bytes()).await?;
            }
            output.write_all(PROMPT.as_bytes()).await?;
            output.flush().await?;

            line.clear();
            if input.read_line(&mut line).await? == 0 {
                return Err(AdventureError::InputClosed);
            }
            let choice = line.trim_end_matches(['\n', '\r']);

            show_menu = match self.advance(choice) {
                Step::Moved(_) => {
                    output.write_all(b"\n").await?;
                    true
                }
                Step::Invalid => {
                    debug!(input = choice, room = self.current().name(), "invalid input");
                    output
                        .write_all(format!("\n{INVALID_INPUT}\n\n").as_bytes())
                        .await?;
                    true
                }
                Step::Time => {
                    let stamp = clock.request().await?;
                    output
                        .write_all(format!("\n {}\n\n", stamp.text).as_bytes())
                        .await?;
                    false
                }
            };
        }

        let summary = self.summary();
        let mut report = format!(
            "YOU HAVE FOUND THE END ROOM. CONGRATULATIONS!\nYOU TOOK {} STEPS. YOUR PATH TO VICTORY WAS:\n",
            summary.steps()
        );
        for name in &summary.path {
            report.push_str(name);
            report.push('\n');
        }
        output.write_all(report.as_bytes()).await?;
        output.flush().await?;

        info!(steps = summary.steps(), "game finished");
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Kitchen (start) connects to Library and Armory; Library leads to
    /// the Theater, which is the end room.
    fn kitchen_map() -> Graph {
        let mut g = Graph::new();
        let kitchen = g.add_room("Kitchen", Role::Start);
        let library = g.add_room("Library", Role::Mid);
        let armory = g.add_room("Armory", Role::Mid);
        let theater = g.add_room("Theater", Role::End);
        for (a, b) in [(kitchen, library), (kitchen, armory), (library, theater)] {
            g.add_edge(a, b).unwrap();
            g.add_edge(b, a).unwrap();
        }
        g
    }

    #[test]
    fn test_step_classifies_input() {
        let g = kitchen_map();
        let kitchen = g.find("Kitchen").unwrap().id();
        assert_eq!(step(&g, kitchen, "time"), Step::Time);
        assert_eq!(
            step(&g, kitchen, "Library"),
            Step::Moved(g.find("Library").unwrap().id())
        );
        assert_eq!(step(&g, kitchen, "Theater"), Step::Invalid);
        assert_eq!(step(&g, kitchen, "TIME"), Step::Invalid);
        assert_eq!(step(&g, kitchen, "library"), Step::Invalid);
    }

    #[test]
    fn test_move_to_connection_extends_path() {
        let g = kitchen_map();
        let mut game = GameLoop::new(&g).unwrap();
        assert_eq!(game.current().name(), "Kitchen");
        assert_eq!(game.steps(), 0);

        assert!(matches!(game.advance("Library"), Step::Moved(_)));
        assert_eq!(game.current().name(), "Library");
        assert_eq!(game.path(), vec!["Library"]);
    }

    #[test]
    fn test_unknown_room_leaves_state_unchanged() {
        let g = kitchen_map();
        let mut game = GameLoop::new(&g).unwrap();
        assert_eq!(game.advance("Pantry"), Step::Invalid);
        assert_eq!(game.current().name(), "Kitchen");
        assert!(game.path().is_empty());
    }

    #[test]
    fn test_time_does_not_move() {
        let g = kitchen_map();
        let mut game = GameLoop::new(&g).unwrap();
        assert_eq!(game.advance("time"), Step::Time);
        assert_eq!(game.current().name(), "Kitchen");
        assert_eq!(game.steps(), 0);
    }

    #[test]
    fn test_reaching_end_room_finishes() {
        let g = kitchen_map();
        let mut game = GameLoop::new(&g).unwrap();
        game.advance("Library");
        assert!(!game.is_finished());
        game.advance("Theater");
        assert!(game.is_finished());
        assert_eq!(game.summary().path, vec!["Library", "Theater"]);
    }

    #[test]
    fn test_revisits_are_counted() {
        let g = kitchen_map();
        let mut game = GameLoop::new(&g).unwrap();
        for input in ["Armory", "Kitchen", "Library", "Kitchen", "Library"] {
            game.advance(input);
        }
        assert_eq!(game.steps(), 5);
        assert_eq!(
            game.path(),
            vec!["Armory", "Kitchen", "Library", "Kitchen", "Library"]
        );
    }

    #[test]
    fn test_menu_lists_connections_with_trailing_period() {
        let g = kitchen_map();
        let game = GameLoop::new(&g).unwrap();
        assert_eq!(
            game.menu(),
            "CURRENT LOCATION: Kitchen\nPOSSIBLE CONNECTIONS: Library, Armory.\n"
        );
    }

    #[test]
    fn test_new_requires_start_room() {
        let mut g = Graph::new();
        g.add_room("Office", Role::End);
        assert!(matches!(
            GameLoop::new(&g),
            Err(GraphError::MissingRole(Role::Start))
        ));
    }
}
