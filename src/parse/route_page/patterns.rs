use crate::parse::{PatternError, ShapePattern, Slot};

// Layout of a route page as rendered in the browser:
//
// <main>
//   <div> header </div>
//   <div>
//     <div> <div>route description</div> <button>Reset</button> </div>
//     <div> dish of the day </div>                                  (optional)
//     <ul> <li>stop</li> <hr> <li>stop</li> ... </ul>
//     <div> link back to the kitchen </div>
//   </div>
// </main>
//
// and of one stop:
//
// <li><div>
//   <div> <p>full name</p> <p>plus code</p> </div>
//   <p>address</p>
//   <div> <span>2</span> <p>portions</p> </div>
//   <p>instructions</p>
//   <p>allergies</p>
//   <p>when not home</p>                                            (optional)
//   <div> <a>Google Maps</a> <a>Call</a> (optional) <div></div> <button/> </div>
// </div></li>

const STOP_ITEM: &[Slot] = &[Slot::element("div").bind("body")];

const STOP_BODY: &[Slot] = &[
    Slot::element("div").bind("name_code"),
    Slot::element("p").bind("address"),
    Slot::element("div").bind("portions"),
    Slot::element("p").bind("instructions"),
    Slot::element("p").bind("allergies"),
    Slot::element("p").bind("not_home").optional(),
    Slot::element("div").bind("links"),
];

const NAME_CODE: &[Slot] = &[
    Slot::element("p").bind("full_name"),
    Slot::element("p").bind("code"),
];

const LINKS: &[Slot] = &[
    Slot::element("a")
        .containing_text("Google Maps")
        .bind("map_link"),
    Slot::element("a")
        .containing_text("Call")
        .bind("call_link")
        .optional(),
    Slot::element("div:empty"),
    Slot::element("button"),
];

const ROUTE_CONTENT: &[Slot] = &[
    Slot::element("div").bind("description"),
    Slot::element("div").bind("dish").optional(),
    Slot::element("ul"),
    Slot::element("div"),
];

/// Every Shape Pattern used on a route page, compiled once per run.
#[derive(Debug)]
pub struct RoutePatterns {
    pub(super) stop_item: ShapePattern,
    pub(super) stop_body: ShapePattern,
    pub(super) name_code: ShapePattern,
    pub(super) links: ShapePattern,
    pub(super) route_content: ShapePattern,
}

impl RoutePatterns {
    pub fn new() -> Result<Self, PatternError> {
        Ok(Self {
            stop_item: ShapePattern::new(STOP_ITEM)?,
            stop_body: ShapePattern::new(STOP_BODY)?,
            name_code: ShapePattern::new(NAME_CODE)?,
            links: ShapePattern::new(LINKS)?,
            route_content: ShapePattern::new(ROUTE_CONTENT)?,
        })
    }
}
