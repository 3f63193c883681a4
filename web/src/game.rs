use crate::api::{DEFAULT_API_BASE, HttpTriviaApi};
use crate::utils::*;
use clap::Args;
use trivia_core as trivia;
use trivia::{CellPos, CellView, GameConfig, GridView, RevealState};
use yew::prelude::*;

pub(crate) enum Msg {
    Start,
    CellClick(CellPos),
    SetupDone(Result<trivia::Board, trivia::SetupFailed>),
}

const fn cell_class(state: RevealState) -> &'static str {
    use RevealState::*;
    match state {
        Hidden => "hidden",
        Question => "question",
        Answer => "answer",
    }
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    pos: CellPos,
    cell: CellView,
    callback: Callback<CellPos>,
}

#[function_component(Cell)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        pos,
        cell,
        callback,
    } = props.clone();

    let class = classes!("clue", cell_class(cell.state));
    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("({}, {}) click", pos.row, pos.col);
        callback.emit(pos);
    });

    html! {
        <td {class} {onclick}>{cell.text}</td>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Base URL of the trivia API
    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Categories per game
    #[arg(long, default_value_t = trivia::CATEGORIES_PER_GAME)]
    pub categories: usize,

    /// Clues per category
    #[arg(long, default_value_t = trivia::QUESTIONS_PER_CATEGORY)]
    pub clues: usize,

    /// How many random clues to draw categories from
    #[arg(long, default_value_t = trivia::RANDOM_POOL_SIZE)]
    pub pool: usize,
}

impl GameProps {
    fn game_config(&self) -> GameConfig {
        GameConfig::new(self.categories, self.clues, self.pool).unwrap_or_else(|err| {
            log::warn!("{}, using the default board", err);
            GameConfig::default()
        })
    }
}

impl Default for GameProps {
    fn default() -> Self {
        Self {
            seed: None,
            api_base: DEFAULT_API_BASE.to_string(),
            categories: trivia::CATEGORIES_PER_GAME,
            clues: trivia::QUESTIONS_PER_CATEGORY,
            pool: trivia::RANDOM_POOL_SIZE,
        }
    }
}

#[derive(Debug)]
pub(crate) struct BoardView {
    controller: trivia::InteractionController<GridView>,
    api: HttpTriviaApi,
    config: GameConfig,
    seed: Option<u64>,
}

impl BoardView {
    /// A forced seed still gives every new game of the session its own board.
    fn round_seed(&self) -> u64 {
        let round = u64::from(self.controller.session().games_started());
        self.seed.map_or_else(js_random_seed, |seed| seed.wrapping_add(round))
    }

    fn start(&mut self, ctx: &Context<Self>) -> bool {
        if !self.controller.begin_reset() {
            return false;
        }
        let seed = self.round_seed();
        log::debug!("new game, seed: {}", seed);
        let mut provider = trivia::ClueProvider::new(self.api.clone(), self.config, seed);
        ctx.link().send_future(async move {
            Msg::SetupDone(trivia::setup_game(&mut provider).await)
        });
        true
    }
}

impl Component for BoardView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        Self {
            controller: trivia::InteractionController::new(GridView::new()),
            api: HttpTriviaApi::new(&props.api_base),
            config: props.game_config(),
            seed: props.seed,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Start => self.start(ctx),
            CellClick(pos) => self.controller.on_cell_click(pos).has_update(),
            SetupDone(result) => self.controller.complete_reset(result),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let session = self.controller.session();
        let grid = self.controller.renderer();
        let loading = session.is_loading();
        let cb_start = ctx.link().callback(|_: MouseEvent| Start);

        html! {
            <div class="trivia">
                <nav>
                    <button onclick={cb_start} disabled={loading}>{session.start_label()}</button>
                    { for loading.then(|| html! { <span class="loading"/> }) }
                    { for grid.error().map(|message| html! { <p class="error">{message.to_string()}</p> }) }
                </nav>
                <table id="jeopardy">
                    <thead>
                        <tr>
                            { for grid.header().iter().map(|title| html! { <th>{title.clone()}</th> }) }
                        </tr>
                    </thead>
                    <tbody>
                        {
                            for (0..grid.rows()).map(|row| html! {
                                <tr>
                                    {
                                        for (0..grid.cols()).map(|col| {
                                            let pos = CellPos::new(row, col);
                                            let cell = grid.cell(pos).cloned().unwrap_or_default();
                                            let callback = ctx.link().callback(CellClick);
                                            html! {
                                                <Cell {pos} {cell} {callback}/>
                                            }
                                        })
                                    }
                                </tr>
                            })
                        }
                    </tbody>
                </table>
            </div>
        }
    }
}
