mod drone;
