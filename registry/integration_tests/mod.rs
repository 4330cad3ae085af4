mod concurrency;
mod logger;
mod registry;
