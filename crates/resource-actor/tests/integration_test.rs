use async_trait::async_trait;
use resource_actor::{ActorEntity, FrameworkError, ResourceActor};

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Dish {
    id: u32,
    name: String,
    spicy: bool,
}

#[derive(Debug)]
struct DishCreate {
    name: String,
}

#[derive(Debug)]
struct DishUpdate {
    spicy: Option<bool>,
}

#[derive(Debug, thiserror::Error, PartialEq)]
enum DishError {
    #[error("dish name is empty")]
    EmptyName,
    #[error("dish cannot be changed")]
    Locked,
}

#[async_trait]
impl ActorEntity for Dish {
    type Id = u32;
    type Create = DishCreate;
    type Update = DishUpdate;
    type Context = ();
    type Error = DishError;

    async fn from_create(id: u32, params: DishCreate, _ctx: &()) -> Result<Self, DishError> {
        if params.name.is_empty() {
            return Err(DishError::EmptyName);
        }
        Ok(Self {
            id,
            name: params.name,
            spicy: false,
        })
    }

    async fn on_update(&mut self, update: DishUpdate, _ctx: &()) -> Result<(), DishError> {
        // Mutate first, then fail: the actor must not keep the half-applied change.
        self.name.push_str(" (edited)");
        match update.spicy {
            Some(spicy) => {
                self.spicy = spicy;
                Ok(())
            }
            None => Err(DishError::Locked),
        }
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.name.clone())
    }
}

fn dish(name: &str) -> DishCreate {
    DishCreate { name: name.into() }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = ResourceActor::new(10);
    let handle = tokio::spawn(actor.run(()));

    // 1. Create
    let created: Dish = client.create(dish("Ramen")).await.unwrap();
    assert_eq!(created.id, 1);
    let id = created.id;

    // 2. Get
    let fetched: Dish = client.get(id).await.unwrap().unwrap();
    assert_eq!(fetched.name, "Ramen");
    assert!(client.get(42).await.unwrap().is_none());

    // 3. Update
    let updated = client
        .update(id, DishUpdate { spicy: Some(true) })
        .await
        .unwrap();
    assert!(updated.spicy);
    assert_eq!(client.get(id).await.unwrap().unwrap(), updated);

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_failed_create_does_not_consume_id() {
    let (actor, client) = ResourceActor::<Dish>::new(10);
    tokio::spawn(actor.run(()));

    let err = client.create(dish("")).await.unwrap_err();
    assert_eq!(
        err.downcast_entity::<DishError>().unwrap(),
        DishError::EmptyName
    );

    assert_eq!(client.create(dish("Udon")).await.unwrap().id, 1);
    assert_eq!(client.create(dish("Soba")).await.unwrap().id, 2);
}

#[tokio::test]
async fn test_unique_key_conflict() {
    let (actor, client) = ResourceActor::<Dish>::new(10);
    tokio::spawn(actor.run(()));

    client.create(dish("Gyoza")).await.unwrap();
    let err = client.create(dish("Gyoza")).await.unwrap_err();
    assert!(matches!(err, FrameworkError::Conflict(ref key) if key == "Gyoza"));

    assert_eq!(client.list().await.unwrap().len(), 1);
    assert_eq!(client.create(dish("Tempura")).await.unwrap().id, 2);
}

#[tokio::test]
async fn test_list_is_in_id_order() {
    let (actor, client) = ResourceActor::<Dish>::new(10);
    tokio::spawn(actor.run(()));

    for name in ["c", "a", "b", "d", "e", "f", "g", "h", "i", "j", "k"] {
        client.create(dish(name)).await.unwrap();
    }

    let ids: Vec<u32> = client.list().await.unwrap().iter().map(|d| d.id).collect();
    assert_eq!(ids, (1..=11).collect::<Vec<_>>());

    let names: Vec<String> = client
        .list()
        .await
        .unwrap()
        .into_iter()
        .take(3)
        .map(|d| d.name)
        .collect();
    assert_eq!(names, ["c", "a", "b"]);
}

#[tokio::test]
async fn test_failed_update_leaves_entity_untouched() {
    let (actor, client) = ResourceActor::<Dish>::new(10);
    tokio::spawn(actor.run(()));

    let id = client.create(dish("Curry")).await.unwrap().id;
    let err = client.update(id, DishUpdate { spicy: None }).await.unwrap_err();
    assert_eq!(err.downcast_entity::<DishError>().unwrap(), DishError::Locked);

    let stored = client.get(id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Curry");
    assert!(!stored.spicy);
}

#[tokio::test]
async fn test_update_missing_entity_is_not_found() {
    let (actor, client) = ResourceActor::<Dish>::new(10);
    tokio::spawn(actor.run(()));

    let err = client
        .update(9, DishUpdate { spicy: Some(true) })
        .await
        .unwrap_err();
    assert!(matches!(err, FrameworkError::NotFound(ref id) if id == "9"));
}

#[tokio::test]
async fn test_closed_actor_reports_actor_closed() {
    let (actor, client) = ResourceActor::<Dish>::new(10);
    drop(actor);

    let err = client.get(1).await.unwrap_err();
    assert!(matches!(err, FrameworkError::ActorClosed));
}
