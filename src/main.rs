use yew_hand_cursor::components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
