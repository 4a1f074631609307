use crate::enums::HttpMethod;
use crate::matcher::Guard;
use crate::router::Router;

// Each verb helper is `where({"method": verb}).index(handler)`.
impl<H: Clone> Router<H> {
    pub fn on(&mut self, method: HttpMethod, handler: H) -> &mut Self {
        self.guard(Guard::method(method)).index(handler);
        self
    }

    pub fn get(&mut self, handler: H) -> &mut Self {
        self.on(HttpMethod::Get, handler)
    }

    pub fn post(&mut self, handler: H) -> &mut Self {
        self.on(HttpMethod::Post, handler)
    }

    pub fn put(&mut self, handler: H) -> &mut Self {
        self.on(HttpMethod::Put, handler)
    }

    pub fn patch(&mut self, handler: H) -> &mut Self {
        self.on(HttpMethod::Patch, handler)
    }

    pub fn delete(&mut self, handler: H) -> &mut Self {
        self.on(HttpMethod::Delete, handler)
    }

    pub fn head(&mut self, handler: H) -> &mut Self {
        self.on(HttpMethod::Head, handler)
    }

    pub fn options(&mut self, handler: H) -> &mut Self {
        self.on(HttpMethod::Options, handler)
    }
}
