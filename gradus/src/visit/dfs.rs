use super::*;

/// Depth-first traversal reporting vertices in the order they are discovered.
pub struct Dfs<G>
where
    G: GraphBase,
{
    raw: RawVisit<G, RawDfsExtra>,
}

pub struct DfsRooted<'a, G>
where
    G: GraphBase,
{
    raw: &'a mut RawVisit<G, RawDfsExtra>,
}

pub struct DfsMulti<'a, G, S>
where
    G: GraphBase,
    S: VisitRoots<G::VertexId>,
{
    raw: &'a mut RawVisit<G, RawDfsExtra>,
    multi: RawVisitMulti<G, RawDfsExtra, S>,
}

impl<G> Dfs<G>
where
    G: GraphBase,
{
    pub fn new(graph: &G) -> Self {
        Self {
            raw: RawVisit::new(graph.vertex_count_hint()),
        }
    }

    pub fn start(&mut self, root: G::VertexId) -> DfsRooted<'_, G> {
        self.raw.start(root);
        DfsRooted { raw: &mut self.raw }
    }

    pub fn start_all<'a>(&'a mut self, graph: &'a G) -> DfsMulti<'a, G, VisitAll<'a, G>>
    where
        G: VertexSet,
    {
        DfsMulti {
            raw: &mut self.raw,
            multi: RawVisitMulti::new(VisitAll::new(graph)),
        }
    }

    pub fn start_multi<S>(&mut self, roots: S) -> DfsMulti<'_, G, S>
    where
        S: VisitRoots<G::VertexId>,
    {
        DfsMulti {
            raw: &mut self.raw,
            multi: RawVisitMulti::new(roots),
        }
    }

    pub fn visited(&self) -> &impl VisitSet<G::VertexId> {
        &self.raw.visited
    }
}

fn next_open<G: Neighbors>(raw: &mut RawVisit<G, RawDfsExtra>, graph: &G) -> Option<G::VertexId> {
    loop {
        if let RawDfsExtraEvent::Open(vertex) = raw.next(graph, |_| {})? {
            return Some(vertex);
        }
    }
}

fn next_close<G: Neighbors>(raw: &mut RawVisit<G, RawDfsExtra>, graph: &G) -> Option<G::VertexId> {
    loop {
        if let RawDfsExtraEvent::Close(vertex) = raw.next(graph, |_| {})? {
            return Some(vertex);
        }
    }
}

impl<'a, G> Visitor<G> for DfsRooted<'a, G>
where
    G: Neighbors,
{
    type Item = G::VertexId;

    fn visit_next(&mut self, graph: &G) -> Option<Self::Item> {
        next_open(self.raw, graph)
    }
}

impl<'a, S, G> Visitor<G> for DfsMulti<'a, G, S>
where
    S: VisitRoots<G::VertexId>,
    G: Neighbors + VertexSet,
{
    type Item = G::VertexId;

    fn visit_next(&mut self, graph: &G) -> Option<Self::Item> {
        self.multi.next_multi(
            self.raw,
            |raw| next_open(raw, graph),
            |vertex| graph.contains_vertex(vertex),
        )
    }
}

/// Depth-first traversal reporting vertices when all their descendants are
/// finished.
pub struct DfsPostOrder<G>
where
    G: GraphBase,
{
    raw: RawVisit<G, RawDfsExtra>,
}

pub struct DfsPostOrderRooted<'a, G>
where
    G: GraphBase,
{
    raw: &'a mut RawVisit<G, RawDfsExtra>,
}

pub struct DfsPostOrderMulti<'a, G, S>
where
    G: GraphBase,
    S: VisitRoots<G::VertexId>,
{
    raw: &'a mut RawVisit<G, RawDfsExtra>,
    multi: RawVisitMulti<G, RawDfsExtra, S>,
}

impl<G> DfsPostOrder<G>
where
    G: GraphBase,
{
    pub fn new(graph: &G) -> Self {
        Self {
            raw: RawVisit::new(graph.vertex_count_hint()),
        }
    }

    pub fn start(&mut self, root: G::VertexId) -> DfsPostOrderRooted<'_, G> {
        self.raw.start(root);
        DfsPostOrderRooted { raw: &mut self.raw }
    }

    pub fn start_all<'a>(&'a mut self, graph: &'a G) -> DfsPostOrderMulti<'a, G, VisitAll<'a, G>>
    where
        G: VertexSet,
    {
        DfsPostOrderMulti {
            raw: &mut self.raw,
            multi: RawVisitMulti::new(VisitAll::new(graph)),
        }
    }

    pub fn start_multi<S>(&mut self, roots: S) -> DfsPostOrderMulti<'_, G, S>
    where
        S: VisitRoots<G::VertexId>,
    {
        DfsPostOrderMulti {
            raw: &mut self.raw,
            multi: RawVisitMulti::new(roots),
        }
    }

    pub fn visited(&self) -> &impl VisitSet<G::VertexId> {
        &self.raw.visited
    }
}

impl<'a, G> Visitor<G> for DfsPostOrderRooted<'a, G>
where
    G: Neighbors,
{
    type Item = G::VertexId;

    fn visit_next(&mut self, graph: &G) -> Option<Self::Item> {
        next_close(self.raw, graph)
    }
}

impl<'a, S, G> Visitor<G> for DfsPostOrderMulti<'a, G, S>
where
    S: VisitRoots<G::VertexId>,
    G: Neighbors + VertexSet,
{
    type Item = G::VertexId;

    fn visit_next(&mut self, graph: &G) -> Option<Self::Item> {
        self.multi.next_multi(
            self.raw,
            |raw| next_close(raw, graph),
            |vertex| graph.contains_vertex(vertex),
        )
    }
}

/// Depth-first traversal reporting [`DfsEvent`]s.
///
/// This is the building block for cycle detection, topological sorting and
/// cut vertex analysis.
pub struct DfsEvents<G>
where
    G: GraphBase,
{
    raw: RawVisit<G, RawDfsExtra>,
    closed: FxHashSet<G::VertexId>,
    is_directed: bool,
}

pub struct DfsEventsRooted<'a, G>
where
    G: GraphBase,
{
    raw: &'a mut RawVisit<G, RawDfsExtra>,
    closed: &'a mut FxHashSet<G::VertexId>,
    queue: VecDeque<DfsEvent<G>>,
    time: usize,
    is_directed: bool,
}

pub struct DfsEventsMulti<'a, G, S>
where
    G: GraphBase,
    S: VisitRoots<G::VertexId>,
{
    raw: &'a mut RawVisit<G, RawDfsExtra>,
    multi: RawVisitMulti<G, RawDfsExtra, S>,
    closed: &'a mut FxHashSet<G::VertexId>,
    queue: VecDeque<DfsEvent<G>>,
    time: usize,
    is_directed: bool,
}

impl<G> DfsEvents<G>
where
    G: GraphBase,
{
    pub fn new(graph: &G) -> Self {
        Self {
            raw: RawVisit::new(graph.vertex_count_hint()),
            closed: FxHashSet::default(),
            is_directed: graph.is_directed(),
        }
    }

    pub fn start(&mut self, root: G::VertexId) -> DfsEventsRooted<'_, G> {
        self.raw.start(root);
        DfsEventsRooted {
            raw: &mut self.raw,
            closed: &mut self.closed,
            queue: VecDeque::new(),
            time: 0,
            is_directed: self.is_directed,
        }
    }

    pub fn start_all<'a>(&'a mut self, graph: &'a G) -> DfsEventsMulti<'a, G, VisitAll<'a, G>>
    where
        G: VertexSet,
    {
        DfsEventsMulti {
            raw: &mut self.raw,
            multi: RawVisitMulti::new(VisitAll::new(graph)),
            closed: &mut self.closed,
            queue: VecDeque::new(),
            time: 0,
            is_directed: self.is_directed,
        }
    }

    pub fn start_multi<S>(&mut self, roots: S) -> DfsEventsMulti<'_, G, S>
    where
        S: VisitRoots<G::VertexId>,
    {
        DfsEventsMulti {
            raw: &mut self.raw,
            multi: RawVisitMulti::new(roots),
            closed: &mut self.closed,
            queue: VecDeque::new(),
            time: 0,
            is_directed: self.is_directed,
        }
    }

    pub fn visited(&self) -> &impl VisitSet<G::VertexId> {
        &self.raw.visited
    }

    fn process_raw_event(
        raw_event: RawEvent<G>,
        closed: &FxHashSet<G::VertexId>,
        queue: &mut VecDeque<DfsEvent<G>>,
        is_directed: bool,
    ) {
        match raw_event {
            RawEvent::Push { vertex, from } => {
                queue.push_back(DfsEvent::TreeEdge {
                    from: from.0,
                    to: vertex,
                    edge: from.1,
                });
            }
            RawEvent::Skip { vertex, from } => {
                if !closed.contains(&vertex) {
                    queue.push_back(DfsEvent::BackEdge {
                        from: from.0,
                        to: vertex,
                        edge: from.1,
                    });
                } else if is_directed {
                    queue.push_back(DfsEvent::CrossForwardEdge {
                        from: from.0,
                        to: vertex,
                        edge: from.1,
                    });
                }

                // An undirected edge to a closed vertex was already reported
                // as a back edge from the other side.
            }
        }
    }

    fn process_step(
        step: RawDfsExtraEvent<G::VertexId>,
        closed: &mut FxHashSet<G::VertexId>,
        queue: &mut VecDeque<DfsEvent<G>>,
        time: &mut usize,
    ) {
        let event = match step {
            RawDfsExtraEvent::Open(vertex) => DfsEvent::Open {
                vertex,
                time: Time(*time),
            },
            RawDfsExtraEvent::Close(vertex) => {
                closed.insert(vertex.clone());
                DfsEvent::Close {
                    vertex,
                    time: Time(*time),
                }
            }
        };

        *time += 1;
        queue.push_back(event);
    }
}

impl<'a, G> Visitor<G> for DfsEventsRooted<'a, G>
where
    G: Neighbors,
{
    type Item = DfsEvent<G>;

    fn visit_next(&mut self, graph: &G) -> Option<Self::Item> {
        if let Some(event) = self.queue.pop_front() {
            return Some(event);
        }

        let closed = &mut *self.closed;
        let queue = &mut self.queue;
        let is_directed = self.is_directed;

        if let Some(step) = self.raw.next(graph, |raw_event| {
            DfsEvents::process_raw_event(raw_event, closed, queue, is_directed)
        }) {
            DfsEvents::process_step(step, closed, queue, &mut self.time);
        }

        self.queue.pop_front()
    }
}

impl<'a, S, G> Visitor<G> for DfsEventsMulti<'a, G, S>
where
    G: Neighbors + VertexSet,
    S: VisitRoots<G::VertexId>,
{
    type Item = DfsEvent<G>;

    fn visit_next(&mut self, graph: &G) -> Option<Self::Item> {
        if let Some(event) = self.queue.pop_front() {
            return Some(event);
        }

        let closed = &mut *self.closed;
        let queue = &mut self.queue;
        let is_directed = self.is_directed;

        if let Some(step) = self.multi.next_multi(
            self.raw,
            |raw| {
                raw.next(graph, |raw_event| {
                    DfsEvents::process_raw_event(raw_event, closed, queue, is_directed)
                })
            },
            |vertex| graph.contains_vertex(vertex),
        ) {
            DfsEvents::process_step(step, closed, queue, &mut self.time);
        }

        self.queue.pop_front()
    }
}
