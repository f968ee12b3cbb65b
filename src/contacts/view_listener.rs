use super::view::View;

pub trait ViewListener {
    fn on_render(&self, _view: &View) {}
}
